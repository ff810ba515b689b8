use cross_word::cli::{parse_args, App, CliCommand};
use cross_word::engine::{Coord, Direction, Placement};
use cross_word::{build, render, tokenize};
use pretty_assertions::assert_eq;

fn cell(grid: &cross_word::Grid, row: i32, col: i32) -> Option<char> {
    grid.get(Coord::new(row, col))
}

#[test]
fn end_to_end_greeting() {
    let tokens = tokenize("Привет, мир!");
    let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
    assert_eq!(texts, vec!["ПРИВЕТ", ",", "МИР!"]);

    let (grid, blocks) = build("Привет, мир!");
    assert_eq!(blocks.len(), 3);
    assert_eq!(
        render(&grid),
        "П , М\nР   И\nИ   Р\nВ   !\nЕ\nТ"
    );
}

#[test]
fn end_to_end_mixed_blocks() {
    let (grid, blocks) = build("Смешно тебе? А мне нет");

    let anchors: Vec<&str> = blocks
        .iter()
        .filter_map(|b| b.anchor().map(|p| p.token.as_str()))
        .collect();
    assert_eq!(anchors, vec!["СМЕШНО", "А", "МНЕ"]);

    assert_eq!(
        blocks[0].placements[1],
        Placement {
            token: "ТЕБЕ?".to_string(),
            direction: Direction::Across,
            row: 2,
            col: -1,
        }
    );

    // The lone letter sits on the first block's crossing row, after a gap.
    assert_eq!(cell(&grid, 2, 5), Some('А'));
    assert_eq!(cell(&grid, 0, 7), Some('М'));
    assert_eq!(cell(&grid, 1, 9), Some('Т'));
    assert_eq!(cell(&grid, 2, 3), Some('?'));
}

#[test]
fn end_to_end_cli_phrase() {
    let args = parse_args(&["-p", "тест есо"]).expect("valid arguments");
    assert_eq!(args.command, CliCommand::Phrase("тест есо".to_string()));

    let mut out = Vec::new();
    App::new(false).run(&args, &mut out).expect("run succeeds");
    let output = String::from_utf8(out).expect("utf-8 output");
    assert_eq!(output, "Phrase: тест есо\nТ\nЕ С О\nС\nТ\n---\n");
}

#[test]
fn every_example_lays_out() {
    let args = parse_args(&["--all"]).expect("valid arguments");
    let mut out = Vec::new();
    App::new(false).run(&args, &mut out).expect("run succeeds");
    let output = String::from_utf8(out).expect("utf-8 output");
    assert_eq!(output.matches("\n---\n").count(), 18);
}
