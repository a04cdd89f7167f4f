#![deny(unsafe_code)]

use clap::Parser;
use fieldpeek_common::{
    inspector::inspect_reader, prelude::*, tracing_support::initialize_tracing,
};
use std::io;

/// Command-line options, parsed using `clap`.
#[derive(Debug, Parser)]
#[command(
    version,
    about = "List the fields of the first project and scene in a JSON export."
)]
struct Opt {
    /// JSON file to inspect. Reads standard input if omitted or `-`.
    input: Option<PathBuf>,
}

impl Opt {
    /// The file to read, or `None` for standard input.
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }
}

fn main() -> Result<()> {
    initialize_tracing();
    let opt = Opt::parse();
    debug!("Args: {:?}", opt);

    let stdout = io::stdout();
    run(&opt, stdout.lock())
}

/// Inspect the input named by `opt`, writing the report to `out`.
fn run<W: Write>(opt: &Opt, out: W) -> Result<()> {
    match opt.input_path() {
        None => inspect_reader(io::stdin().lock(), out),
        Some(path) => {
            let f = File::open(path).with_context(|| {
                format!("can't open input file {}", path.display())
            })?;
            inspect_reader(f, out)
        }
    }
}

#[test]
fn parse_args() {
    let opt = Opt::try_parse_from(["fieldpeek"]).unwrap();
    assert_eq!(opt.input_path(), None);
    let opt = Opt::try_parse_from(["fieldpeek", "-"]).unwrap();
    assert_eq!(opt.input_path(), None);
    let opt = Opt::try_parse_from(["fieldpeek", "export.json"]).unwrap();
    assert_eq!(opt.input_path(), Some(Path::new("export.json")));
    assert!(Opt::try_parse_from(["fieldpeek", "a.json", "b.json"]).is_err());
}

#[test]
fn run_reads_named_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("export.json");
    let opt = Opt { input: Some(path) };
    let mut out = vec![];
    run(&opt, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\
Available project fields:
  - id: int
  - name: str

Available scene fields:
  - duration: float
  - title: str
",
    );
}

#[test]
fn run_reports_missing_file() {
    let opt = Opt::try_parse_from(["fieldpeek", "no/such/export.json"]).unwrap();
    let mut out = vec![];
    let err = run(&opt, &mut out).expect_err("missing file should fail");
    assert!(format!("{:#}", err)
        .contains("can't open input file no/such/export.json"));
    assert!(out.is_empty());
}
