//! Form flow tests
//!
//! Drives the reactive form the way the event loop does: keystrokes, blur,
//! focus changes, swap.

use ck_app::{ContrastForm, Field, DEFAULT_BACKGROUND, DEFAULT_TEXT};
use ck_color::Color;
use ck_wcag::Rating;

fn type_into(form: &mut ContrastForm, field: Field, value: &str) {
    form.set_focus(field);
    for _ in 0..form.raw(field).len() {
        form.backspace();
    }
    for c in value.chars() {
        form.push_char(c);
    }
}

#[test]
fn test_initial_state_matches_defaults() {
    let form = ContrastForm::default();
    assert_eq!(form.valid(Field::Background), DEFAULT_BACKGROUND);
    assert_eq!(form.valid(Field::Text), DEFAULT_TEXT);
    assert_eq!(form.report().ratio_text, "8.42:1");
    for rating in [
        form.report().normal_aa,
        form.report().normal_aaa,
        form.report().large_aa,
        form.report().large_aaa,
        form.report().ui_aa,
    ] {
        assert_eq!(rating, Rating::Pass);
    }
}

#[test]
fn test_typing_low_contrast_pair() {
    let mut form = ContrastForm::default();
    type_into(&mut form, Field::Background, "#FFFFFF");
    type_into(&mut form, Field::Text, "#CCCCCC");
    form.blur();
    assert_eq!(form.report().ratio_text, "1.61:1");
    for rating in [
        form.report().normal_aa,
        form.report().normal_aaa,
        form.report().large_aa,
        form.report().large_aaa,
        form.report().ui_aa,
    ] {
        assert_eq!(rating, Rating::Fail);
    }
}

#[test]
fn test_invalid_entry_reverts_on_blur() {
    let mut form = ContrastForm::default();
    let report_before = form.report().clone();

    type_into(&mut form, Field::Text, "notacolor");
    assert_eq!(form.raw(Field::Text), "notacolor");
    form.blur();

    assert_eq!(form.raw(Field::Text), "#112A46");
    assert_eq!(*form.report(), report_before);
}

#[test]
fn test_swap_black_white() {
    let mut form = ContrastForm::new(Color::BLACK, Color::WHITE);
    form.swap();
    assert_eq!(form.valid(Field::Background), Color::WHITE);
    assert_eq!(form.valid(Field::Text), Color::BLACK);
    assert_eq!(form.report().ratio_text, "21.0:1");
}

#[test]
fn test_named_color_canonicalized_on_blur() {
    let mut form = ContrastForm::default();
    type_into(&mut form, Field::Background, "white");
    // Mid-edit the raw text is the name, the valid color already follows
    assert_eq!(form.raw(Field::Background), "white");
    assert_eq!(form.valid(Field::Background), Color::WHITE);
    form.blur();
    assert_eq!(form.raw(Field::Background), "#FFFFFF");
}

#[test]
fn test_focus_cycle_commits_in_order() {
    let mut form = ContrastForm::default();
    form.set_focus(Field::Background);
    form.push_char('!');
    // Tab-style focus change commits (and reverts) the background edit
    form.set_focus(Field::Text);
    assert_eq!(form.raw(Field::Background), "#ACC8E5");
    form.push_char('x');
    form.blur();
    assert_eq!(form.raw(Field::Text), "#112A46");
    assert_eq!(form.focus(), None);
}

#[test]
fn test_transient_valid_states_while_typing() {
    let mut form = ContrastForm::default();
    form.set_focus(Field::Text);
    for _ in 0..form.raw(Field::Text).len() {
        form.backspace();
    }
    // "#000" parses as shorthand black mid-typing toward "#000080"
    for c in "#000".chars() {
        form.push_char(c);
    }
    assert_eq!(form.valid(Field::Text), Color::BLACK);
    for c in "080".chars() {
        form.push_char(c);
    }
    assert_eq!(form.valid(Field::Text), Color::rgb(0, 0, 0x80));
    form.blur();
    assert_eq!(form.raw(Field::Text), "#000080");
}
