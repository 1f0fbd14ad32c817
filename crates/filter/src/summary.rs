use serde::Serialize;

/// The live result count shown above a list: "Showing X of Y products".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    pub visible: usize,
    pub total: usize,
    pub noun: &'static str,
}

impl ResultsSummary {
    pub fn new(visible: usize, total: usize, noun: &'static str) -> Self {
        Self { visible, total, noun }
    }

    pub fn is_filtered(&self) -> bool {
        self.visible != self.total
    }
}

impl core::fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Showing {} of {} {}", self.visible, self.total, self.noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_count_line() {
        let summary = ResultsSummary::new(3, 10, "orders");
        assert_eq!(summary.to_string(), "Showing 3 of 10 orders");
        assert!(summary.is_filtered());
        assert!(!ResultsSummary::new(0, 0, "agents").is_filtered());
    }
}
