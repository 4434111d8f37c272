use std::path::{Path, PathBuf};

use crate::app::config::DEFAULT_FILE_NAME;
use crate::logger::LOG_FILE_NAME;

/// Directory holding the gui configuration file and the log file.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoDirectory(PathBuf);

impl DemoDirectory {
    pub fn new(p: PathBuf) -> Self {
        DemoDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(DemoDirectory::new)
    }
}

impl DemoDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_path(&self) -> PathBuf {
        self.0.join(DEFAULT_FILE_NAME)
    }
    pub fn log_path(&self) -> PathBuf {
        self.0.join(LOG_FILE_NAME)
    }
}

/// `~/.sdk-demo` on Linux, a `SdkDemo` folder in the standard configuration
/// directory elsewhere.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".sdk-demo");

        #[cfg(not(target_os = "linux"))]
        path.push("SdkDemo");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}
