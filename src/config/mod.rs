mod filesystem;
mod ini;
mod loader;
mod model;
mod pyproject;
mod values;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{CONFIG_FILENAMES, ConfigLoader, FileConfigLoader, LoadResult};
pub use model::{
    Config, DEFAULT_EXTENSIONS, DEFAULT_MAX_LINE_LENGTH, Settings, normalize_extension,
};
pub use values::{parse_codes, parse_path_errors};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Code;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.max_line_length, DEFAULT_MAX_LINE_LENGTH);
        assert_eq!(config.extensions.len(), DEFAULT_EXTENSIONS.len());
    }

    #[test]
    fn file_settings_then_cli_settings() {
        let mut config = Config::default();
        config.apply(Settings {
            max_line_length: Some(100),
            ignore: vec![Code::D002],
            ..Settings::default()
        });
        config.apply(Settings {
            max_line_length: Some(120),
            ignore: vec![Code::D003],
            ..Settings::default()
        });

        assert_eq!(config.max_line_length, 120);
        assert!(config.ignore.contains(&Code::D002));
        assert!(config.ignore.contains(&Code::D003));
    }
}
