// The three demo animations shipped with the tool.

use crate::types::RenderConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Alpha,
    Beta,
    Gamma,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Alpha, Preset::Beta, Preset::Gamma];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Alpha => "alpha",
            Preset::Beta => "beta",
            Preset::Gamma => "gamma",
        }
    }

    /// Output file name, e.g. `autocomplete_alpha.gif`.
    pub fn file_name(self) -> String {
        format!("autocomplete_{}.gif", self.name())
    }

    pub fn config(self) -> RenderConfig {
        match self {
            Preset::Alpha => RenderConfig::new(
                "git commit -m \"perf:",
                " improve database query performance by adding indexes to frequently accessed \
                 columns and optimizing ORM relationships",
            ),
            Preset::Beta => RenderConfig::new(
                "design",
                " a highly available, fault-tolerant microservices architecture leveraging \
                 Kubernetes for container orchestration and Kafka for asynchronous communication",
            ),
            Preset::Gamma => RenderConfig::new(
                "plan",
                " a comprehensive cloud migration strategy from on-premise infrastructure to \
                 Google Cloud Platform, including data transfer, application refactoring, and \
                 rollback procedures",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_distinct() {
        let names: Vec<String> = Preset::ALL.iter().map(|p| p.file_name()).collect();
        assert_eq!(names, ["autocomplete_alpha.gif", "autocomplete_beta.gif", "autocomplete_gamma.gif"]);
    }

    #[test]
    fn suggestions_continue_the_input() {
        for preset in Preset::ALL {
            let cfg = preset.config();
            assert!(!cfg.input_text.is_empty());
            assert!(cfg.suggestion_text.starts_with(' '), "{preset:?}");
            assert!(!cfg.suggestion_text.contains("  "), "{preset:?}");
        }
    }
}
