//! Menu text interpretation and image recognition.
//!
//! Recognition is delegated to an external OCR program. A recognition
//! failure is never fatal: callers get an empty string and recommendations
//! proceed without menu items.

use crate::{Error, MenuItemSet, Result};
use std::io::Write;
use std::process::Command;

/// Menu items longer than this are treated as prose, not dish names
pub const MAX_MENU_ITEM_LEN: usize = 40;
/// Menu items must be strictly longer than this
pub const MIN_MENU_ITEM_LEN: usize = 2;

/// Placeholder in the recognizer command replaced by the image path
pub const IMAGE_PLACEHOLDER: &str = "{image}";

/// Split recognized text into candidate menu items
///
/// Splits on newline, comma and semicolon, then trims and lowercases. Items
/// of length 3 to 40 (in characters) are kept.
pub fn extract_menu_items(text: &str) -> MenuItemSet {
    text.split(['\n', ',', ';'])
        .map(|line| line.trim().to_lowercase())
        .filter(|item| {
            let len = item.chars().count();
            len > MIN_MENU_ITEM_LEN && len <= MAX_MENU_ITEM_LEN
        })
        .collect()
}

/// Turns a menu image into raw text
pub trait MenuRecognizer {
    fn recognize(&self, image: &[u8]) -> Result<String>;
}

/// Run a recognizer, treating any failure as "no text"
pub fn recognize_or_empty(recognizer: &dyn MenuRecognizer, image: &[u8]) -> String {
    match recognizer.recognize(image) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Menu recognition failed: {}. Continuing without menu items.", e);
            String::new()
        }
    }
}

/// Recognize an image and extract its menu items in one step
pub fn menu_items_from_image(recognizer: &dyn MenuRecognizer, image: &[u8]) -> MenuItemSet {
    let items = extract_menu_items(&recognize_or_empty(recognizer, image));
    tracing::info!("Extracted {} menu items from image", items.len());
    items
}

/// Recognizer backed by an external OCR command
///
/// The image is written to a temporary file whose path replaces every
/// `{image}` argument; the command's stdout is the recognized text.
#[derive(Clone, Debug)]
pub struct CommandRecognizer {
    argv: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(argv: Vec<String>) -> Result<Self> {
        if argv.is_empty() || argv[0].trim().is_empty() {
            return Err(Error::Config("recognizer command is empty".into()));
        }
        Ok(Self { argv })
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

impl MenuRecognizer for CommandRecognizer {
    fn recognize(&self, image: &[u8]) -> Result<String> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(image)?;
        file.flush()?;

        let path = file.path().to_string_lossy().into_owned();
        let args: Vec<String> = self.argv[1..]
            .iter()
            .map(|arg| arg.replace(IMAGE_PLACEHOLDER, &path))
            .collect();

        tracing::debug!("Running recognizer {:?} {:?}", self.argv[0], args);

        let output = Command::new(&self.argv[0])
            .args(&args)
            .output()
            .map_err(|e| Error::Recognition(format!("failed to run {}: {}", self.argv[0], e)))?;

        if !output.status.success() {
            return Err(Error::Recognition(format!(
                "{} exited with {}: {}",
                self.argv[0],
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRecognizer(&'static str);

    impl MenuRecognizer for FixedRecognizer {
        fn recognize(&self, _image: &[u8]) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingRecognizer;

    impl MenuRecognizer for FailingRecognizer {
        fn recognize(&self, _image: &[u8]) -> Result<String> {
            Err(Error::Recognition("model not loaded".into()))
        }
    }

    fn set(items: &[&str]) -> MenuItemSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_splits_and_normalizes() {
        let items = extract_menu_items("Idli, Dosa\nSambhar;ok");
        assert_eq!(items, set(&["idli", "dosa", "sambhar"]));
    }

    #[test]
    fn test_extract_length_boundaries() {
        let forty = "a".repeat(40);
        let forty_one = "b".repeat(41);
        let text = format!("ab\nabc\n{}\n{}", forty, forty_one);

        let items = extract_menu_items(&text);
        assert!(!items.contains("ab"));
        assert!(items.contains("abc"));
        assert!(items.contains(&forty));
        assert!(!items.contains(&forty_one));
    }

    #[test]
    fn test_extract_deduplicates_after_normalizing() {
        let items = extract_menu_items("  Paneer Tikka ;paneer tikka,PANEER TIKKA\r\n");
        assert_eq!(items, set(&["paneer tikka"]));
    }

    #[test]
    fn test_extract_empty_text() {
        assert!(extract_menu_items("").is_empty());
        assert!(extract_menu_items(" , ;\n").is_empty());
    }

    #[test]
    fn test_failed_recognition_yields_no_items() {
        crate::logging::init_test();
        assert_eq!(recognize_or_empty(&FailingRecognizer, b"png"), "");
        assert!(menu_items_from_image(&FailingRecognizer, b"png").is_empty());
    }

    #[test]
    fn test_menu_items_from_image() {
        let items = menu_items_from_image(&FixedRecognizer("Tofu Stir Fry\nTea"), b"png");
        assert_eq!(items, set(&["tofu stir fry", "tea"]));
    }

    #[test]
    fn test_command_recognizer_rejects_empty_command() {
        assert!(CommandRecognizer::new(vec![]).is_err());
        assert!(CommandRecognizer::new(vec!["  ".into()]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_recognizer_reads_stdout() {
        let recognizer =
            CommandRecognizer::new(vec!["cat".into(), IMAGE_PLACEHOLDER.into()]).unwrap();
        let text = recognizer.recognize(b"Masala Dosa\nFilter Coffee").unwrap();
        assert_eq!(text, "Masala Dosa\nFilter Coffee");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_recognizer_non_zero_exit() {
        let recognizer = CommandRecognizer::new(vec!["false".into()]).unwrap();
        let err = recognizer.recognize(b"").unwrap_err();
        assert!(matches!(err, Error::Recognition(_)));
    }

    #[test]
    fn test_command_recognizer_missing_program() {
        let recognizer =
            CommandRecognizer::new(vec!["nutrivision-no-such-ocr-binary".into()]).unwrap();
        assert_eq!(recognize_or_empty(&recognizer, b"img"), "");
    }
}
