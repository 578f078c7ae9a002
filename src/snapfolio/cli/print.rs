use chrono::{NaiveDate, Utc};
use colored::Colorize;
use snapfolio::api::{CmdMessage, MessageLevel};
use snapfolio::config::{FolioConfig, CONFIG_KEYS};
use snapfolio::model::{DisplayPhoto, LightboxView};
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const CATEGORY_WIDTH: usize = 16;
const LIKES_WIDTH: usize = 8;
const TIME_WIDTH: usize = 14;
const LIKED_MARKER: &str = "♥";
const UNLIKED_MARKER: &str = "♡";

pub(super) fn print_messages(out: &mut impl Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_photos(
    out: &mut impl Write,
    photos: &[DisplayPhoto],
    hidden: usize,
) -> io::Result<()> {
    if photos.is_empty() {
        writeln!(out, "No photos found.")?;
        writeln!(
            out,
            "{}",
            "Try adjusting your filters or search query.".dimmed()
        )?;
        return Ok(());
    }

    for dp in photos {
        let id_str = format!("#{:<5}", dp.photo.id);
        let marker = if dp.liked { LIKED_MARKER } else { UNLIKED_MARKER };
        let likes = format!("{} {}", marker, dp.like_count);
        let time_ago = format_time_ago(dp.photo.date);

        let fixed = id_str.width() + CATEGORY_WIDTH + LIKES_WIDTH + TIME_WIDTH + 1;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&dp.photo.title, available);
        let padding = available.saturating_sub(title.width());

        let category = truncate_to_width(&dp.photo.category, CATEGORY_WIDTH);
        let likes_colored = if dp.liked {
            format!("{:<width$}", likes, width = LIKES_WIDTH).red()
        } else {
            format!("{:<width$}", likes, width = LIKES_WIDTH).normal()
        };

        writeln!(
            out,
            "{} {}{}{:<cw$}{}{}",
            id_str.yellow(),
            title.bold(),
            " ".repeat(padding),
            category.cyan(),
            likes_colored,
            time_ago.dimmed(),
            cw = CATEGORY_WIDTH
        )?;
    }

    if hidden > 0 {
        writeln!(
            out,
            "{}",
            format!("… {} more photo(s) not shown", hidden).dimmed()
        )?;
    }
    Ok(())
}

pub(super) fn print_lightbox(out: &mut impl Write, view: &LightboxView) -> io::Result<()> {
    let photo = &view.photo.photo;
    writeln!(
        out,
        "{} {}",
        format!("#{}", photo.id).yellow(),
        photo.title.bold()
    )?;
    writeln!(out, "--------------------------------")?;
    writeln!(out, "{}  {}", photo.category.cyan(), photo.date)?;
    writeln!(out, "{}", photo.description)?;
    writeln!(out, "Dimensions: {} × {}", photo.width, photo.height)?;

    let marker = if view.photo.liked {
        LIKED_MARKER.red()
    } else {
        UNLIKED_MARKER.normal()
    };
    writeln!(out, "{} {} Likes", marker, view.photo.like_count)?;
    writeln!(out, "Image: {}", photo.src.dimmed())?;

    let prev = view
        .prev_id
        .map(|id| format!("‹ #{}", id))
        .unwrap_or_default();
    let next = view
        .next_id
        .map(|id| format!("#{} ›", id))
        .unwrap_or_default();
    writeln!(
        out,
        "{:<10} {:^14} {:>10}",
        prev,
        format!("{} / {}", view.position, view.total),
        next
    )?;
    Ok(())
}

pub(super) fn print_config(out: &mut impl Write, config: &FolioConfig) -> io::Result<()> {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(date: NaiveDate) -> String {
    let today = Utc::now().date_naive();
    let age = today.signed_duration_since(date);

    let label = if age.num_days() <= 0 {
        "today".to_string()
    } else {
        Formatter::new().convert(age.to_std().unwrap_or_default())
    };
    format!("{:>width$}", label, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_titles_with_ellipsis() {
        assert_eq!(truncate_to_width("Sunset Beach", 20), "Sunset Beach");
        assert_eq!(truncate_to_width("Sunset Beach", 7), "Sunset…");
    }

    #[test]
    fn future_and_current_dates_read_today() {
        let today = Utc::now().date_naive();
        assert_eq!(format_time_ago(today).trim(), "today");
    }
}
