/// Replace characters LaunchBox strips from media filenames.
///
/// LaunchBox saves art for "Zelda: A Link's Awakening" as
/// `Zelda_ A Link_s Awakening-01.png`.
pub fn scrub_title(title: &str) -> String {
    title.replace([':', '\'', '/'], "_")
}

/// Final segment of a LaunchBox application path.
///
/// Both `\` and `/` count as separators regardless of the host OS, since
/// catalogs written on Windows are routinely read elsewhere.
pub fn rom_basename(application_path: &str) -> &str {
    application_path
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or(application_path)
}

/// Convert a LaunchBox application path to a host-native relative path.
pub fn native_rom_path(application_path: &str) -> std::path::PathBuf {
    application_path.split(['\\', '/']).filter(|s| !s.is_empty()).collect()
}

/// Extension of a filename including the leading dot, or "" if there is none.
///
/// Unlike [`std::path::Path::extension`], a trailing dot yields `"."` so that
/// `Title-01.` keeps producing `Game.` on the way out.
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// Filename with its [`file_extension`] removed.
pub fn strip_extension(name: &str) -> &str {
    &name[..name.len() - file_extension(name).len()]
}
