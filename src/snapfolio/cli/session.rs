//! Line-oriented `browse` session.
//!
//! One [`Gallery`] lives for the whole session, so likes, filters and the
//! page cursor carry over between commands and vanish on exit.

use super::print::{print_lightbox, print_photos};
use colored::Colorize;
use snapfolio::gallery::Gallery;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  all                 show every category
  filter <category>   show one category (no argument: all)
  search [text]       search titles and descriptions (no argument: clear)
  more                load the next page
  show                print the visible photos again
  like [id]           like/unlike a photo (default: the open one)
  open <id>           open a photo in the lightbox
  next | prev         move within the filtered photos
  close | esc         close the lightbox
  help                this text
  quit                leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Filter(Option<String>),
    Search(String),
    More,
    Show,
    Like(Option<u32>),
    Open(u32),
    Next,
    Prev,
    Close,
    Help,
    Quit,
    Invalid(String),
}

fn parse_action(line: &str) -> Option<Action> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let action = match (word.to_lowercase().as_str(), rest) {
        ("all", _) | ("filter", "") => Action::Filter(None),
        ("filter", category) => Action::Filter(Some(category.to_string())),
        ("search", text) => Action::Search(text.to_string()),
        ("more", _) => Action::More,
        ("show" | "ls", _) => Action::Show,
        ("like", "") => Action::Like(None),
        ("like", id) => match id.parse() {
            Ok(id) => Action::Like(Some(id)),
            Err(_) => Action::Invalid(format!("Not a photo id: {}", id)),
        },
        ("open", id) => match id.parse() {
            Ok(id) => Action::Open(id),
            Err(_) => Action::Invalid(format!("Not a photo id: {}", id)),
        },
        ("next" | "n", _) => Action::Next,
        ("prev" | "p", _) => Action::Prev,
        ("close" | "esc", _) => Action::Close,
        ("help" | "?", _) => Action::Help,
        ("quit" | "exit" | "q", _) => Action::Quit,
        _ => Action::Invalid(format!("Unknown command: {} (try `help`)", word)),
    };
    Some(action)
}

pub(super) fn run_session(
    gallery: &mut Gallery,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    print_visible(gallery, out)?;

    for line in input.lines() {
        let line = line?;
        let Some(action) = parse_action(&line) else {
            continue;
        };
        if action == Action::Quit {
            break;
        }
        apply(gallery, action, out)?;
    }
    Ok(())
}

fn apply(gallery: &mut Gallery, action: Action, out: &mut impl Write) -> io::Result<()> {
    match action {
        Action::Filter(category) => {
            gallery.filter_by_category(category.as_deref());
            print_visible(gallery, out)
        }
        Action::Search(text) => {
            gallery.search_photos(&text);
            print_visible(gallery, out)
        }
        Action::More => {
            if gallery.load_more() {
                print_visible(gallery, out)
            } else {
                writeln!(out, "{}", "All photos are already shown.".dimmed())
            }
        }
        Action::Show => print_visible(gallery, out),
        Action::Like(id) => {
            let Some(id) = id.or_else(|| gallery.lightbox().selected()) else {
                return writeln!(out, "{}", "Open a photo or give an id to like.".yellow());
            };
            let Some(photo) = gallery.state().find(id).cloned() else {
                return writeln!(out, "{}", format!("Photo not found: {}", id).red());
            };
            let liked = gallery.toggle_like(id);
            let count = gallery.state().like_count(&photo);
            let verb = if liked { "Liked" } else { "Unliked" };
            writeln!(
                out,
                "{}",
                format!("{} #{} {} ({} likes)", verb, id, photo.title, count).green()
            )
        }
        Action::Open(id) => {
            if gallery.open(id) {
                print_open(gallery, out)
            } else {
                writeln!(
                    out,
                    "{}",
                    format!("Photo #{} is not in the current list.", id).red()
                )
            }
        }
        Action::Next => step(gallery, out, Gallery::next, "last"),
        Action::Prev => step(gallery, out, Gallery::prev, "first"),
        Action::Close => {
            gallery.close();
            writeln!(out, "{}", "Closed.".dimmed())
        }
        Action::Help => writeln!(out, "{}", HELP),
        Action::Invalid(message) => writeln!(out, "{}", message.yellow()),
        Action::Quit => Ok(()),
    }
}

fn step(
    gallery: &mut Gallery,
    out: &mut impl Write,
    move_fn: fn(&mut Gallery) -> bool,
    edge: &str,
) -> io::Result<()> {
    if !gallery.lightbox().is_open() {
        return writeln!(out, "{}", "No photo is open.".yellow());
    }
    if move_fn(gallery) {
        print_open(gallery, out)
    } else {
        writeln!(out, "{}", format!("Already at the {} photo.", edge).dimmed())
    }
}

fn print_open(gallery: &Gallery, out: &mut impl Write) -> io::Result<()> {
    match gallery.lightbox_view() {
        Some(view) => print_lightbox(out, &view),
        None => writeln!(out, "{}", "The open photo is hidden by the current filter.".yellow()),
    }
}

fn print_visible(gallery: &Gallery, out: &mut impl Write) -> io::Result<()> {
    print_photos(out, &gallery.visible_display(), gallery.hidden_count())?;

    let state = gallery.state();
    let mut status = format!(
        "Showing {} of {}",
        gallery.visible().len(),
        gallery.filtered_photos().len()
    );
    if let Some(category) = state.selected_category() {
        status.push_str(&format!(" · category: {}", category));
    }
    if let Some(query) = state.query() {
        status.push_str(&format!(" · search: \"{}\"", query));
    }
    writeln!(out, "{}", status.dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapfolio::gallery::Pager;
    use snapfolio::model::PhotoRecord;

    fn photo(id: u32, title: &str, category: &str) -> PhotoRecord {
        PhotoRecord {
            id,
            title: title.to_string(),
            src: format!("/images/gallery/{}.jpg", id),
            thumbnail: format!("/images/gallery/{}-thumb.jpg", id),
            date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            category: category.to_string(),
            alt: format!("Photo {}", id),
            width: 800,
            height: 600,
            likes: 2,
            description: String::new(),
        }
    }

    fn session(script: &str) -> String {
        let mut gallery = Gallery::new(Pager::new(2)).with_photos(vec![
            photo(1, "Sunset Beach", "outdoor"),
            photo(2, "Kitchen", "indoor"),
            photo(3, "Pine Forest", "outdoor"),
        ]);
        let mut out = Vec::new();
        run_session(&mut gallery, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands_and_arguments() {
        assert_eq!(parse_action("  "), None);
        assert_eq!(parse_action("all"), Some(Action::Filter(None)));
        assert_eq!(
            parse_action("filter special-moments"),
            Some(Action::Filter(Some("special-moments".into())))
        );
        assert_eq!(
            parse_action("search sunset beach"),
            Some(Action::Search("sunset beach".into()))
        );
        assert_eq!(parse_action("search"), Some(Action::Search(String::new())));
        assert_eq!(parse_action("LIKE 3"), Some(Action::Like(Some(3))));
        assert_eq!(parse_action("esc"), Some(Action::Close));
        assert!(matches!(parse_action("open x"), Some(Action::Invalid(_))));
        assert!(matches!(parse_action("dance"), Some(Action::Invalid(_))));
    }

    #[test]
    fn filter_then_more_reveals_rest() {
        let output = session("more\nmore\n");
        assert!(output.contains("Showing 2 of 3"));
        assert!(output.contains("Showing 3 of 3"));
        assert!(output.contains("All photos are already shown."));
    }

    #[test]
    fn like_is_counted_on_top_of_baseline() {
        let output = session("like 1\nlike 1\n");
        assert!(output.contains("Liked #1 Sunset Beach (3 likes)"));
        assert!(output.contains("Unliked #1 Sunset Beach (2 likes)"));
    }

    #[test]
    fn lightbox_stops_at_edges() {
        let output = session("filter outdoor\nopen 1\nprev\nnext\nnext\nclose\nnext\n");
        assert!(output.contains("Already at the first photo."));
        assert!(output.contains("Pine Forest"));
        assert!(output.contains("Already at the last photo."));
        assert!(output.contains("No photo is open."));
    }

    #[test]
    fn search_and_category_combine() {
        let output = session("filter indoor\nsearch beach\n");
        assert!(output.contains("No photos found."));
        assert!(output.contains("category: indoor"));
    }

    #[test]
    fn quit_stops_reading() {
        let output = session("quit\nlike 1\n");
        assert!(!output.contains("Liked"));
    }
}
