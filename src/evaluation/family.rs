use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Group of precision/recall columns in a result file.
///
/// The serialized name is the column prefix: `"<prefix> precision"` and
/// `"<prefix> recall"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum MetricFamily {
    #[strum(serialize = "mined")]
    Mined,
    #[strum(serialize = "deletion baseline")]
    DeletionBaseline,
    #[strum(serialize = "addition baseline")]
    AdditionBaseline,
}

impl MetricFamily {
    #[inline]
    pub fn prefix(self) -> &'static str {
        self.into()
    }

    pub fn precision_column(self) -> String {
        format!("{} precision", self.prefix())
    }

    pub fn recall_column(self) -> String {
        format!("{} recall", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn column_names() {
        assert_eq!(MetricFamily::Mined.precision_column(), "mined precision");
        assert_eq!(
            MetricFamily::DeletionBaseline.recall_column(),
            "deletion baseline recall"
        );
        let all: Vec<_> = MetricFamily::iter().map(MetricFamily::prefix).collect();
        assert_eq!(all, ["mined", "deletion baseline", "addition baseline"]);
    }
}
