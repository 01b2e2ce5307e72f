/// Extensions accepted for sound uploads.
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "aac", "ogg", "oga", "flac"];

/// Splits a filename into its base and extension, the extension keeping its
/// leading dot. A dot in first position marks a hidden file, not an extension.
pub fn split_extension(filename: &str) -> (&str, Option<&str>) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => (&filename[..idx], Some(&filename[idx..])),
        _ => (filename, None),
    }
}

pub fn has_allowed_extension<S: AsRef<str>>(filename: &str, allowed_extensions: &[S]) -> bool {
    split_extension(filename).1.is_some_and(|extension| {
        let extension = &extension[1..];
        allowed_extensions
            .iter()
            .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(extension))
    })
}

pub fn is_audio_filename(filename: &str) -> bool {
    has_allowed_extension(filename, AUDIO_EXTENSIONS)
}

pub fn sanitize_filename(filename: &str) -> String {
    filename.replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("foo bar baz.mp3"), ("foo bar baz", Some(".mp3")));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", Some(".gz")));
        assert_eq!(split_extension("README"), ("README", None));
        assert_eq!(split_extension(".hidden"), (".hidden", None));
        assert_eq!(split_extension("trailing."), ("trailing", Some(".")));
        assert_eq!(split_extension(""), ("", None));
    }

    #[test]
    fn test_is_audio_filename() {
        assert!(is_audio_filename("song.mp3"));
        assert!(is_audio_filename("Live Set.FLAC"));
        assert!(is_audio_filename("a.b.ogg"));
        assert!(!is_audio_filename("mp3"));
        assert!(!is_audio_filename("cover.jpg"));
        assert!(!is_audio_filename(".wav"));
    }

    #[test]
    fn test_has_allowed_extension_with_owned_list() {
        let allowed = vec!["opus".to_string()];
        assert!(has_allowed_extension("voice.OPUS", &allowed));
        assert!(!has_allowed_extension("voice.mp3", &allowed));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("../etc\\passwd"), ".._etc_passwd");
    }
}
