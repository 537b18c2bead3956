use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::Invocation;
use crate::error::Error;
use crate::processor;

/// State for a single run, built once from the command line.
pub struct Runner {
    invocation: Invocation,
}

impl Runner {
    pub fn new(invocation: Invocation) -> Self {
        Self { invocation }
    }

    /// Processes every path in order and stops at the first failure.
    /// Returns the output paths written.
    pub fn run(&self, log: &mut dyn Write) -> Result<Vec<PathBuf>, Error> {
        if self.invocation.paths.is_empty() {
            return Err(Error::PathRequired);
        }

        let data = self.invocation.data.as_ref();
        let mut written = Vec::with_capacity(self.invocation.paths.len());
        for path in &self.invocation.paths {
            let out = processor::process(path, data)?;
            if self.invocation.verbose {
                // output is already on disk; log write errors are dropped
                let _ = writeln!(log, "[render] {} {} {}", path, "->".cyan(), out.display());
            }
            written.push(out);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn runner(paths: Vec<String>, data: Option<serde_json::Value>, verbose: bool) -> Runner {
        Runner::new(Invocation {
            paths,
            data,
            verbose,
        })
    }

    #[test]
    fn requires_a_path() {
        let err = runner(vec![], None, false).run(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::PathRequired));
        assert_eq!(err.to_string(), "path required");
    }

    #[test]
    fn shares_data_across_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let a = dir.path().join("a.tmpl");
        let b = dir.path().join("b.tmpl");
        fs::write(&a, "a={{.V}}")?;
        fs::write(&b, "b={{.V}}")?;

        let paths = vec![a.display().to_string(), b.display().to_string()];
        let written = runner(paths, Some(json!({"V": "x"})), false).run(&mut Vec::new())?;

        assert_eq!(written, vec![dir.path().join("a"), dir.path().join("b")]);
        assert_eq!(fs::read_to_string(dir.path().join("a"))?, "a=x");
        assert_eq!(fs::read_to_string(dir.path().join("b"))?, "b=x");
        Ok(())
    }

    #[test]
    fn stops_at_first_failure() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let first = dir.path().join("first.tmpl");
        let missing = dir.path().join("missing.tmpl");
        let last = dir.path().join("last.tmpl");
        fs::write(&first, "one")?;
        fs::write(&last, "three")?;

        let paths = [&first, &missing, &last]
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        let err = runner(paths, None, false).run(&mut Vec::new()).unwrap_err();

        assert!(matches!(err, Error::NotFound));
        assert_eq!(fs::read_to_string(dir.path().join("first"))?, "one");
        assert!(!dir.path().join("last").exists());
        Ok(())
    }

    #[test]
    fn verbose_logs_each_file() -> anyhow::Result<()> {
        colored::control::set_override(false);
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("x.tmpl");
        fs::write(&src, "x")?;

        let mut log = Vec::new();
        runner(vec![src.display().to_string()], None, true).run(&mut log)?;

        let line = String::from_utf8(log)?;
        assert_eq!(
            line,
            format!("[render] {} -> {}\n", src.display(), dir.path().join("x").display())
        );
        Ok(())
    }

    struct BrokenLog;

    impl Write for BrokenLog {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn log_failure_does_not_fail_run() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let a = dir.path().join("a.tmpl");
        let b = dir.path().join("b.tmpl");
        fs::write(&a, "a")?;
        fs::write(&b, "b")?;

        let paths = vec![a.display().to_string(), b.display().to_string()];
        let written = runner(paths, None, true).run(&mut BrokenLog)?;

        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(dir.path().join("b"))?, "b");
        Ok(())
    }

    #[test]
    fn quiet_by_default() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("x.tmpl");
        fs::write(&src, "x")?;

        let mut log = Vec::new();
        runner(vec![src.display().to_string()], None, false).run(&mut log)?;

        assert!(log.is_empty());
        Ok(())
    }
}
