//! List command report.

use javax_codegen::CommandRegistry;

use super::output::{Output, Report};

/// The generators a host menu would show.
#[derive(Debug)]
pub struct ListReport<'a> {
    pub registry: &'a CommandRegistry,
}

impl Report for ListReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if self.registry.is_empty() {
            out.preformatted("No generators registered");
            return;
        }

        for (i, entry) in self.registry.entries().enumerate() {
            out.numbered_item(i + 1, &format!("{} (javax {})", entry.label, entry.kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_list_report() {
        let registry = CommandRegistry::builtin();
        let mut out = RecordingOutput::default();
        ListReport {
            registry: &registry,
        }
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "1. Generate constructor (javax constructor)",
                "2. Generate builder (javax builder)",
                "3. Generate getters (javax getters)",
            ]
        );
    }

    #[test]
    fn test_empty_list_report() {
        let registry = CommandRegistry::new();
        let mut out = RecordingOutput::default();
        ListReport {
            registry: &registry,
        }
        .render(&mut out);
        assert_eq!(out.lines, ["No generators registered"]);
    }
}
