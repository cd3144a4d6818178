crate::define_id_enum_with_display! {
    /// Kind of generated target a build configuration can request.
    ///
    /// Variant order is the canonical emission order. Names that match no
    /// kind deserialize into `Custom` and are rejected at composition time.
    TargetKind {
        Build => "build" : "Build",
        Clean => "clean" : "Clean",
        Run => "run" : "Run",
        Test => "test" : "Test",
        Coverage => "coverage" : "Coverage",
        Lint => "lint" : "Lint",
        Format => "format" : "Format",
        Ci => "ci" : "CI" | "Ci",
        Deploy => "deploy" : "Deploy",
    }
}

impl TargetKind {
    /// Name of the generated Makefile target.
    pub fn target_name(&self) -> &str {
        self.serde_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_canonical_order() {
        let kinds: BTreeSet<TargetKind> = [
            TargetKind::Deploy,
            TargetKind::Test,
            TargetKind::Build,
            TargetKind::Ci,
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = kinds.iter().map(|k| k.target_name()).collect();
        assert_eq!(names, vec!["build", "test", "ci", "deploy"]);
    }

    #[test]
    fn test_unknown_kind_becomes_custom() {
        let kind: TargetKind = serde_yaml::from_str("release").unwrap();
        assert_eq!(kind, TargetKind::Custom("release".to_string()));
    }

    #[test]
    fn test_display_name_parses() {
        assert_eq!(TargetKind::parse("CI"), TargetKind::Ci);
        assert_eq!(TargetKind::parse("coverage"), TargetKind::Coverage);
    }
}
