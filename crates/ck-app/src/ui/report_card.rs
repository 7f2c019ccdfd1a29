//! Report Card
//!
//! The headline ratio and the five conformance badges, grouped the way the
//! criteria read: Normal Text (AA, AAA), Large Text (AA, AAA), UI (AA).

use ck_wcag::{ContrastReport, Rating};

use super::font::{draw_text, text_width, CHAR_HEIGHT};
use super::{colors, fill_rect, Rect};

const BADGE_WIDTH: usize = 52;
const BADGE_HEIGHT: usize = 16;
const GROUP_GAP: usize = 24;

/// Render the ratio headline and badges into `rect`.
pub fn render(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    rect: Rect,
    report: &ContrastReport,
) {
    let center_x = rect.x + rect.width / 2;

    let heading = "Contrast Ratio";
    draw_text(
        buffer,
        buffer_width,
        buffer_height,
        (center_x.saturating_sub(text_width(heading, 1) / 2)) as i32,
        rect.y as i32,
        heading,
        colors::TEXT_DIM,
        1,
    );

    let ratio_y = rect.y + CHAR_HEIGHT + 8;
    draw_text(
        buffer,
        buffer_width,
        buffer_height,
        (center_x.saturating_sub(text_width(&report.ratio_text, 3) / 2)) as i32,
        ratio_y as i32,
        &report.ratio_text,
        colors::TEXT,
        3,
    );

    let normal = [("AA", report.normal_aa), ("AAA", report.normal_aaa)];
    let large = [("AA", report.large_aa), ("AAA", report.large_aaa)];
    let ui = [("AA", report.ui_aa)];
    let groups: [(&str, &[(&str, Rating)]); 3] =
        [("Normal Text", &normal), ("Large Text", &large), ("UI", &ui)];

    let total: usize = groups.iter().map(|g| group_width(g.1)).sum::<usize>()
        + GROUP_GAP * (groups.len() - 1);
    let mut x = center_x.saturating_sub(total / 2);
    let label_y = ratio_y + CHAR_HEIGHT * 3 + 12;
    let badge_y = label_y + CHAR_HEIGHT + 6;

    for (label, badges) in groups {
        let width = group_width(badges);
        draw_text(
            buffer,
            buffer_width,
            buffer_height,
            (x + width / 2 - text_width(label, 1).min(width) / 2) as i32,
            label_y as i32,
            label,
            colors::TEXT_DIM,
            1,
        );
        let mut badge_x = x;
        for &(level, rating) in badges {
            render_badge(
                buffer,
                buffer_width,
                buffer_height,
                Rect::new(badge_x, badge_y, BADGE_WIDTH, BADGE_HEIGHT * 2 + 4),
                level,
                rating,
            );
            badge_x += BADGE_WIDTH + 8;
        }
        x += width + GROUP_GAP;
    }
}

fn group_width(badges: &[(&str, Rating)]) -> usize {
    badges.len() * (BADGE_WIDTH + 8) - 8
}

/// One badge: the level name over a filled pass/fail pill.
fn render_badge(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    rect: Rect,
    level: &str,
    rating: Rating,
) {
    draw_text(
        buffer,
        buffer_width,
        buffer_height,
        (rect.x + rect.width / 2 - text_width(level, 1) / 2) as i32,
        rect.y as i32,
        level,
        colors::TEXT,
        1,
    );

    let pill = Rect::new(rect.x, rect.y + BADGE_HEIGHT, rect.width, BADGE_HEIGHT);
    let fill = if rating.is_pass() { colors::PASS_BG } else { colors::FAIL_BG };
    fill_rect(buffer, buffer_width, buffer_height, pill, fill);
    draw_text(
        buffer,
        buffer_width,
        buffer_height,
        (pill.x + pill.width / 2 - text_width(rating.label(), 1) / 2) as i32,
        (pill.y + (BADGE_HEIGHT - CHAR_HEIGHT) / 2) as i32,
        rating.label(),
        colors::TEXT,
        1,
    );
}
