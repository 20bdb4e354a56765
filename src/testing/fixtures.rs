use std::io::Write;
use tempfile::NamedTempFile;

/// Three constraints; the third has no test cases and an undefined mined
/// precision. Addition baseline columns are absent.
pub const RESULTS_TSV: &str = "\
constraint\tproperty instances\tcurrent violations\tcorrections with one addition\tcorrections with one deletion\tcorrections with one replacement\ttest set size\tmined precision\tmined recall\tdeletion baseline precision\tdeletion baseline recall
P17 one-of\t1200000\t30\t5\t3\t2\t100\t0.9\t0.8\t0.2\tNaN
P31 type\t1400000\t20\t4\t2\t1\t50\t0.5\t0.4\t0.2\tNaN
P569 single value\t0\t10\t3\t2\t1\t0\tNaN\t1.0\tNaN\tNaN
";

/// Header-less rule file: name, property, then the two sort columns.
pub const RULES_TSV: &str = "\
r1\tP17\t0.5\t10
r2\tP31\t0.9\t5
r3\tP569\t0.5\t3
r4\tP17\t0.9\t40
r5\tP31\t0.7\t100
";

pub const GAME_JSON: &str = r#"{
  "Q21510859": {
    "PROPOSED": { "*": 10 },
    "APPROVED": { "*": 3, "alice": 2, "bob": 1 },
    "REJECTED": { "*": 1, "bob": 1 }
  },
  "Q21510855": {
    "APPROVED": { "*": 2, "carol": 2 },
    "OBSOLETE": { "*": 4, "alice": 4 }
  },
  "Q21510862": {
    "REJECTED": { "*": 2, "dave": 2 }
  },
  "Q1": {
    "PROPOSED": { "*": 5 }
  }
}"#;

pub fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
