use std::path::{Path, PathBuf};

use super::*;
use crate::checker::Code;

mod mock_fs;

use mock_fs::MockFileSystem;

fn loader(fs: MockFileSystem) -> FileConfigLoader<MockFileSystem> {
    FileConfigLoader::with_fs(fs)
}

#[test]
fn defaults_when_no_config_file() {
    let result = loader(MockFileSystem::new()).load().unwrap();
    assert_eq!(result, LoadResult::default());
    assert!(result.source.is_none());
}

#[test]
fn reads_doc8_ini() {
    let fs = MockFileSystem::new().with_file("/project/doc8.ini", "[doc8]\nmax-line-length = 90\n");
    let result = loader(fs).load().unwrap();
    assert_eq!(result.settings.max_line_length, Some(90));
    assert_eq!(result.source, Some(PathBuf::from("/project/doc8.ini")));
}

#[test]
fn doc8_ini_takes_priority_over_tox_ini() {
    let fs = MockFileSystem::new()
        .with_file("/project/doc8.ini", "[doc8]\nmax-line-length = 90\n")
        .with_file("/project/tox.ini", "[doc8]\nmax-line-length = 120\n");
    let result = loader(fs).load().unwrap();
    assert_eq!(result.settings.max_line_length, Some(90));
}

#[test]
fn tox_ini_takes_priority_over_pep8_ini() {
    let fs = MockFileSystem::new()
        .with_file("/project/pep8.ini", "[doc8]\nignore = D001\n")
        .with_file("/project/tox.ini", "[doc8]\nignore = D002\n");
    let result = loader(fs).load().unwrap();
    assert_eq!(result.settings.ignore, vec![Code::D002]);
}

#[test]
fn first_existing_file_wins_without_section() {
    let fs = MockFileSystem::new()
        .with_file("/project/tox.ini", "[tox]\nenvlist = py3\n")
        .with_file("/project/pep8.ini", "[doc8]\nmax-line-length = 120\n");
    let result = loader(fs).load().unwrap();
    assert_eq!(result.settings, Settings::default());
    assert_eq!(result.source, Some(PathBuf::from("/project/tox.ini")));
}

#[test]
fn pyproject_is_last_resort() {
    let fs = MockFileSystem::new()
        .with_file("/project/pyproject.toml", "[tool.doc8]\nmax-line-length = 110\n");
    let result = loader(fs).load().unwrap();
    assert_eq!(result.settings.max_line_length, Some(110));
}

#[test]
fn searches_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/elsewhere")
        .with_file("/project/doc8.ini", "[doc8]\nmax-line-length = 90\n");
    let result = loader(fs).load().unwrap();
    assert!(result.source.is_none());
}

#[test]
fn malformed_value_is_fatal() {
    let fs = MockFileSystem::new().with_file("/project/tox.ini", "[doc8]\nmax-line-length = x\n");
    let err = loader(fs).load().unwrap_err();
    assert!(matches!(err, crate::Doc8Error::InvalidValue { .. }));
}

#[test]
fn explicit_path_must_exist() {
    let err = loader(MockFileSystem::new())
        .load_from_path(Path::new("/project/custom.ini"))
        .unwrap_err();
    assert!(matches!(err, crate::Doc8Error::FileRead { .. }));
}

#[test]
fn explicit_toml_path() {
    let fs = MockFileSystem::new().with_file(
        "/project/docs.toml",
        "[tool.doc8]\nignore = [\"D003\"]\n",
    );
    let result = loader(fs)
        .load_from_path(Path::new("/project/docs.toml"))
        .unwrap();
    assert_eq!(result.settings.ignore, vec![Code::D003]);
}
