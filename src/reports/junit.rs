//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::analyzer::InspectedGraph;
use crate::error::LoopError;
use crate::utils::string::escape_xml;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, graphs: &[InspectedGraph]) -> Result<String, LoopError> {
        let mut output = String::new();
        let failures = graphs.iter().filter(|g| g.is_cyclic()).count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="loop-the-loop" tests="{}" failures="{failures}">"#,
            graphs.len()
        )?;
        writeln!(
            output,
            r#"  <testsuite name="graph-cycles" tests="{}" failures="{failures}">"#,
            graphs.len()
        )?;

        for inspected in graphs {
            let name = escape_xml(inspected.name());

            match inspected.detection.witness() {
                Some(witness) => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="loop-the-loop">"#
                    )?;
                    writeln!(output, r#"      <failure message="Graph is CYCLIC">"#)?;
                    writeln!(output, "Vertices in a cycle: {}", escape_xml(&witness.to_string()))?;
                    writeln!(output, r#"      </failure>"#)?;
                    writeln!(output, r#"    </testcase>"#)?;
                }
                None => {
                    writeln!(
                        output,
                        r#"    <testcase name="{name}" classname="loop-the-loop" />"#
                    )?;
                }
            }
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{chain, inspected, two_cycle};

    #[test]
    fn test_junit_counts() {
        let report = JunitReportGenerator::new()
            .generate_report(&[two_cycle(), chain()])
            .unwrap();

        assert!(report.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(report.contains(r#"<testsuites name="loop-the-loop" tests="2" failures="1">"#));
        assert!(report.contains(r#"<testcase name="chain" classname="loop-the-loop" />"#));
        assert_eq!(report.matches("<failure").count(), 1);
    }

    #[test]
    fn test_junit_escapes_names() {
        let report = JunitReportGenerator::new()
            .generate_report(&[inspected("cups & saucers", 1, &[(0, 0)])])
            .unwrap();

        assert!(report.contains(r#"name="cups &amp; saucers""#));
        assert!(report.contains("Vertices in a cycle: 0 -&gt; 0"));
    }

    #[test]
    fn test_junit_empty_batch() {
        let report = JunitReportGenerator::new().generate_report(&[]).unwrap();

        assert!(report.contains(r#"tests="0" failures="0""#));
        assert!(report.trim_end().ends_with("</testsuites>"));
    }
}
