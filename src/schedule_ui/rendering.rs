use std::io::{Stdout, Write};

use crossterm::{execute, style::Print};

use super::colors::{
    ansi_code, day_fg, error_fg, flag_fg, header_bg, header_fg, hour_fg, link_fg, text_fg,
};
use super::view::{MatchRow, ScheduleView, ViewState};
use crate::error::AppError;

const CARD_WIDTH: usize = 48;
const LINK_LABEL: &str = "MATCH DISPONIBLE ICI";

/// Builds the whole schedule as one string of ANSI-styled lines.
pub fn render_schedule(view: &ScheduleView, title: &str, disable_links: bool) -> String {
    let mut buffer = String::with_capacity(1024);

    buffer.push_str(&format!(
        "\x1b[48;5;{}m\x1b[38;5;{}m {:<width$}\x1b[0m\n\n",
        ansi_code(header_bg(), 21),
        ansi_code(header_fg(), 231),
        title.to_uppercase(),
        width = CARD_WIDTH - 1
    ));

    match view.state() {
        ViewState::Loading => {
            buffer.push_str(&format!(
                "\x1b[38;5;{}mChargement des matchs...\x1b[0m\n",
                ansi_code(text_fg(), 231)
            ));
        }
        ViewState::Failed(message) => {
            buffer.push_str(&format!(
                "\x1b[38;5;{}mImpossible de charger les matchs : {}\x1b[0m\n",
                ansi_code(error_fg(), 196),
                message
            ));
        }
        ViewState::Ready(matches) if matches.is_empty() => {
            buffer.push_str(&format!(
                "\x1b[38;5;{}mAucun match à venir\x1b[0m\n",
                ansi_code(text_fg(), 231)
            ));
        }
        ViewState::Ready(_) => {
            for row in view.rows() {
                render_row(&mut buffer, &row, disable_links);
            }
        }
    }

    buffer
}

fn render_row(buffer: &mut String, row: &MatchRow<'_>, disable_links: bool) {
    let text_code = ansi_code(text_fg(), 231);

    buffer.push_str(&format!(
        "\x1b[38;5;{}m{:^width$}\x1b[0m\n",
        ansi_code(day_fg(), 46),
        row.labels.day_label,
        width = CARD_WIDTH
    ));

    // Opponent on the left, flag and kickoff on the right
    let time_box = format!("[{}] {}", row.labels.flag_code.to_uppercase(), row.labels.hour_label);
    let name_width = CARD_WIDTH.saturating_sub(time_box.chars().count() + 4);
    buffer.push_str(&format!(
        "  \x1b[38;5;{}m{:<name_width$}\x1b[0m  \x1b[38;5;{}m[{}]\x1b[0m \x1b[38;5;{}m{}\x1b[0m\n",
        text_code,
        row.item.opponent,
        ansi_code(flag_fg(), 51),
        row.labels.flag_code.to_uppercase(),
        ansi_code(hour_fg(), 226),
        row.labels.hour_label,
    ));

    // Logo address, plain mode only
    if disable_links && !row.item.opponent_logo.is_empty() {
        buffer.push_str(&format!(
            "  \x1b[38;5;{}mLogo : {}\x1b[0m\n",
            text_code, row.item.opponent_logo
        ));
    }

    if row.item.has_link() {
        let link_code = ansi_code(link_fg(), 201);
        if disable_links {
            buffer.push_str(&format!(
                "  \x1b[38;5;{}m{}\x1b[0m\n",
                link_code, row.item.link
            ));
        } else {
            buffer.push_str(&format!(
                "  \x1b[38;5;{}m\x1b]8;;{}\x07{}\x1b]8;;\x07\x1b[0m\n",
                link_code, row.item.link, LINK_LABEL
            ));
        }
    }

    buffer.push('\n');
}

/// Writes the rendered schedule to the terminal in a single operation.
pub fn print_schedule(
    stdout: &mut Stdout,
    view: &ScheduleView,
    title: &str,
    disable_links: bool,
) -> Result<(), AppError> {
    let buffer = render_schedule(view, title, disable_links);
    execute!(stdout, Print(buffer))?;
    stdout.flush()?;
    Ok(())
}
