mod common;

use common::{char_width, words};
use insta::assert_snapshot;
use typesphere::config::DEFAULT_PARAGRAPH;
use typesphere::palette::Palette;
use typesphere::config::AppConfig;
use typesphere::{wrap_words, AppState, LayoutError, LayoutParams, TextBlock, WordColor};

fn joined(lines: &[typesphere::Line]) -> Vec<String> {
    lines.iter().map(|l| l.text()).collect()
}

#[test]
fn test_short_words_pack_two_per_line() {
    let lines = wrap_words(words("a b c d"), 3.0, 1.0).unwrap();
    assert_eq!(joined(&lines), vec!["a b", "c d"]);
}

#[test]
fn test_wrapping_preserves_word_order() {
    let input = words(DEFAULT_PARAGRAPH);
    for target in [1.0, 7.5, 20.0, 30.0, 64.0, f64::INFINITY] {
        let lines = wrap_words(input.clone(), target, 1.0).unwrap();
        let flattened: Vec<_> = lines.into_iter().flat_map(|l| l.words).collect();
        assert_eq!(flattened, input, "target {target}");
    }
}

#[test]
fn test_lines_fit_unless_single_word() {
    for target in [4.0, 9.0, 18.0, 33.0] {
        let lines = wrap_words(words(DEFAULT_PARAGRAPH), target, 1.0).unwrap();
        for line in &lines {
            assert!(!line.is_empty());
            if line.len() > 1 {
                assert!(
                    line.width(1.0) <= target,
                    "{:?} wider than {target}",
                    line.text()
                );
            }
        }
    }
}

#[test]
fn test_lines_are_maximal() {
    let target = 24.0;
    let lines = wrap_words(words(DEFAULT_PARAGRAPH), target, 1.0).unwrap();
    for pair in lines.windows(2) {
        let next = &pair[1].words[0];
        assert!(pair[0].width(1.0) + 1.0 + next.width > target);
    }
}

#[test]
fn test_single_word_gives_single_line() {
    let lines = wrap_words(words("Lorem"), 100.0, 1.0).unwrap();
    assert_eq!(joined(&lines), vec!["Lorem"]);
}

#[test]
fn test_infinite_target_keeps_one_line() {
    let lines = wrap_words(words(DEFAULT_PARAGRAPH), f64::INFINITY, 1.0).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 19);
}

#[test]
fn test_empty_paragraph_has_no_lines() {
    assert!(wrap_words(words("   "), 10.0, 1.0).unwrap().is_empty());
}

#[test]
fn test_zero_width_measure_is_rejected() {
    let block = TextBlock::build(
        "Lorem ipsum",
        &|_: &str| 0.0,
        &Palette::default(),
        &LayoutParams::new(1.0, 10.0),
    );
    assert!(matches!(
        block,
        Err(LayoutError::InvalidMeasurement { .. })
    ));
}

#[test]
fn test_default_paragraph_wraps_at_thirty_columns() {
    let lines = wrap_words(words(DEFAULT_PARAGRAPH), 30.0, 1.0).unwrap();
    assert_snapshot!(joined(&lines).join("\n"), @r"
    Lorem ipsum dolor sit amet,
    consectetur adipiscing elit.
    Sed do eiusmod tempor
    incididunt ut labore et dolore
    magna aliqua.
    ");
}

#[test]
fn test_block_colours_follow_palette() {
    let block = TextBlock::build(
        "Lorem, ipsum! SED dolore? quux",
        &char_width,
        &Palette::default(),
        &LayoutParams::new(1.0, 100.0),
    )
    .unwrap();

    let colours: Vec<_> = block.words.iter().map(|w| w.color).collect();
    assert_eq!(
        colours,
        vec![
            WordColor::Red,
            WordColor::Blue,
            WordColor::Green,
            WordColor::Green,
            WordColor::Default,
        ]
    );
}

#[test]
fn test_block_is_centred_on_origin() {
    let params = LayoutParams::new(2.0, 40.0);
    let block = TextBlock::build(
        DEFAULT_PARAGRAPH,
        &char_width,
        &Palette::default(),
        &params,
    )
    .unwrap();

    let half_height = block.total_height() / 2.0;
    assert_eq!(block.words[0].y, half_height);

    for (index, line) in block.lines.iter().enumerate() {
        let placed: Vec<_> = block.words.iter().filter(|w| w.line == index).collect();
        assert_eq!(placed.len(), line.len());

        let first = placed[0];
        let last = placed[placed.len() - 1];
        let right = last.x + last.width;
        assert!((first.x + right).abs() < 1e-9, "line {index} off centre");
        assert_eq!(first.y, half_height - index as f64 * params.line_height());
    }
}

#[test]
fn test_block_serializes_lines_and_placed_words() {
    let params = LayoutParams {
        font_size: 1.0,
        target_width: 100.0,
        space_ratio: 1.0,
        line_height_ratio: 2.0,
        grid: None,
    };
    let block = TextBlock::build("Lorem, sed quux", &char_width, &Palette::default(), &params)
        .unwrap();

    assert_snapshot!(serde_json::to_string(&block).unwrap(), @r#"{"lines":[{"words":[{"text":"Lorem,","width":6.0,"color":"red"},{"text":"sed","width":3.0,"color":"green"},{"text":"quux","width":4.0,"color":"default"}]}],"words":[{"text":"Lorem,","color":"red","x":-7.5,"y":1.0,"width":6.0,"line":0},{"text":"sed","color":"green","x":-0.5,"y":1.0,"width":3.0,"line":0},{"text":"quux","color":"default","x":3.5,"y":1.0,"width":4.0,"line":0}],"target_width":100.0,"spacing":1.0,"line_height":2.0}"#);
}

#[test]
fn test_layout_json_for_viewport() {
    let mut app = AppState::new(AppConfig::default()).unwrap();
    let json = app.layout_json(100, 24).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let words = value["words"].as_array().unwrap();
    assert_eq!(words.len(), 19);
    assert_eq!(words[0]["text"], "Lorem");
    assert_eq!(words[0]["color"], "red");
    assert_eq!(words[1]["color"], "blue");
    for word in words {
        assert!(word["x"].is_f64() && word["y"].is_f64());
        assert!(word["line"].is_u64());
    }

    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.len(), app.scene.text.line_count());
    assert!(value["target_width"].as_f64().unwrap() > 0.0);
    assert_eq!(app.terminal_width, 100);
}
