use crate::commands::{CmdMessage, CmdResult};
use crate::commands::optimize::SUPPORTED_EXTENSIONS;

/// How well an input format suits the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Recommended,
    Accepted,
    Unsupported,
}

#[derive(Debug, Clone, Copy)]
pub struct FormatNote {
    pub extension: &'static str,
    pub support: Support,
    pub note: &'static str,
}

pub const FORMAT_NOTES: [FormatNote; 7] = [
    FormatNote {
        extension: "jpg",
        support: Support::Recommended,
        note: "Best; already compressed",
    },
    FormatNote {
        extension: "jpeg",
        support: Support::Recommended,
        note: "Same as .jpg",
    },
    FormatNote {
        extension: "png",
        support: Support::Accepted,
        note: "Converted to JPEG",
    },
    FormatNote {
        extension: "webp",
        support: Support::Recommended,
        note: "Modern format",
    },
    FormatNote {
        extension: "tiff",
        support: Support::Accepted,
        note: "High quality, large files",
    },
    FormatNote {
        extension: "gif",
        support: Support::Unsupported,
        note: "Convert to PNG or JPEG first",
    },
    FormatNote {
        extension: "bmp",
        support: Support::Unsupported,
        note: "Convert to PNG or JPEG first",
    },
];

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    for format in FORMAT_NOTES {
        let line = format!(".{:<6} {}", format.extension, format.note);
        let message = match format.support {
            Support::Recommended => CmdMessage::success(line),
            Support::Accepted => CmdMessage::info(line),
            Support::Unsupported => CmdMessage::warning(line),
        };
        result.add_message(message);
    }
    result.add_message(CmdMessage::info(format!(
        "Accepted by `snapfolio optimize`: {}",
        SUPPORTED_EXTENSIONS.join(", ")
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_agree_with_optimizer_support() {
        for format in FORMAT_NOTES {
            let accepted = SUPPORTED_EXTENSIONS.contains(&format.extension);
            assert_eq!(
                accepted,
                format.support != Support::Unsupported,
                "{}",
                format.extension
            );
        }
    }
}
