use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use primex_generate::output::{export, export_file_name};
use primex_generate::{ExportFormat, GenerationResult};

use super::RegistryResult;
use crate::workspace::write_bytes_atomic;

/// Where a rendered export goes.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    Stdout,
    /// Exact file path.
    File(PathBuf),
    /// Directory; the file name is derived from generator, format and time.
    Dir(PathBuf),
}

/// Render `result` and deliver it to `target`. Returns the written path, if any.
pub fn write_export(
    result: &GenerationResult,
    format: ExportFormat,
    target: &ExportTarget,
    exported_at: DateTime<Utc>,
) -> RegistryResult<Option<PathBuf>> {
    let rendered = export(result, format, exported_at)?;
    let path = match target {
        ExportTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
            return Ok(None);
        }
        ExportTarget::File(path) => path.clone(),
        ExportTarget::Dir(dir) => dir.join(export_file_name(result.kind, format, exported_at)),
    };

    write_bytes_atomic(&path, rendered.as_bytes())?;
    tracing::info!(
        event = "export_written",
        path = %path.display(),
        format = %format,
        mime = format.mime_type(),
        lines = result.lines.len()
    );
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::TimeZone;
    use primex_core::GeneratorKind;

    use super::*;

    fn temp_out_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("primex_export_{label}_{}", uuid::Uuid::new_v4()));
        dir
    }

    fn sample_result() -> GenerationResult {
        GenerationResult {
            kind: GeneratorKind::Custom2,
            lines: vec![
                "combo1:value0123456789".to_string(),
                "combo2:valueabcdefghij".to_string(),
            ],
            elapsed_ms: 1,
        }
    }

    #[test]
    fn dir_target_writes_generated_file_name() {
        let dir = temp_out_dir("dir");
        let at = Utc
            .timestamp_millis_opt(1_760_000_000_123)
            .single()
            .expect("valid timestamp");

        let written = write_export(
            &sample_result(),
            ExportFormat::Csv,
            &ExportTarget::Dir(dir.clone()),
            at,
        )
        .expect("export written")
        .expect("file path");

        assert_eq!(written, dir.join("primex_generated_custom2_1760000000123.csv"));
        let content = fs::read_to_string(&written).expect("read export");
        assert_eq!(
            content,
            "Index,Data\n1,combo1:value0123456789\n2,combo2:valueabcdefghij"
        );
        let entries: Vec<_> = fs::read_dir(&dir)
            .expect("read out dir")
            .map(|entry| entry.expect("dir entry").file_name())
            .collect();
        assert_eq!(entries.len(), 1, "temp file left behind: {entries:?}");

        fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn file_target_replaces_existing_content() {
        let dir = temp_out_dir("file");
        let path = dir.join("nested").join("combos.txt");
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(&path, "stale").expect("seed file");

        let written = write_export(
            &sample_result(),
            ExportFormat::Text,
            &ExportTarget::File(path.clone()),
            Utc::now(),
        )
        .expect("export written");

        assert_eq!(written.as_deref(), Some(path.as_path()));
        assert_eq!(
            fs::read_to_string(&path).expect("read export"),
            "combo1:value0123456789\ncombo2:valueabcdefghij"
        );
        assert!(!path.with_file_name(".combos.txt.tmp").exists());

        fs::remove_dir_all(&dir).expect("cleanup");
    }
}
