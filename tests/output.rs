use gtf2bed::collect::FeatureFilter;
use gtf2bed::{run, Config, Format, Reporter};
use std::path::{Path, PathBuf};

const GTF: &str = "chr1\tsrc\texon\t1\t10\t.\t+\t.\tgene_id \"g1\";\n";

/// Writes a file to the temporary directory and returns its path.
fn write_temp_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn config(input: PathBuf, output: PathBuf) -> Config {
    Config {
        input,
        output,
        format: Format::Gtf,
        feature_types: FeatureFilter::default(),
        log: None,
        silent: true,
    }
}

/// A new output file gets the same mode as any normally created file.
#[cfg(unix)]
#[test]
fn output_mode_matches_normal_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let input_path = write_temp_file(dir.path(), "input.gtf", GTF);
    let output_path = dir.path().join("output.bed");
    run(&config(input_path, output_path.clone()), &mut Reporter::quiet()).unwrap();

    let reference = dir.path().join("reference.bed");
    std::fs::File::create(&reference).unwrap();

    let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&output_path), mode(&reference));
}

/// Overwriting keeps the permissions of the existing output file.
#[cfg(unix)]
#[test]
fn output_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let input_path = write_temp_file(dir.path(), "input.gtf", GTF);
    let output_path = write_temp_file(dir.path(), "output.bed", "stale\n");
    std::fs::set_permissions(&output_path, std::fs::Permissions::from_mode(0o640)).unwrap();

    run(&config(input_path, output_path.clone()), &mut Reporter::quiet()).unwrap();

    let meta = std::fs::metadata(&output_path).unwrap();
    assert_eq!(meta.permissions().mode() & 0o777, 0o640);
    assert!(std::fs::read_to_string(&output_path)
        .unwrap()
        .starts_with("#chr\t"));
}

/// A device destination is written into, not replaced.
#[cfg(unix)]
#[test]
fn output_to_device_is_written_in_place() {
    use std::os::unix::fs::FileTypeExt;

    let dir = tempfile::tempdir().unwrap();
    let input_path = write_temp_file(dir.path(), "input.gtf", GTF);
    let device = PathBuf::from("/dev/null");

    run(&config(input_path, device.clone()), &mut Reporter::quiet()).unwrap();

    let meta = std::fs::metadata(&device).unwrap();
    assert!(meta.file_type().is_char_device());
}
