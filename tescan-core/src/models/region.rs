use std::fmt::{self, Display};

///
/// Region struct, representation of one annotated feature in a BED-like file
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,

    pub rest: Option<String>,
}

impl Region {
    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_width() {
        let region = Region {
            chr: "chr1".to_string(),
            start: 100,
            end: 250,
            rest: None,
        };
        assert_eq!(region.width(), 150);
    }

    #[rstest]
    fn test_as_string_without_rest() {
        let region = Region {
            chr: "scaffold_12".to_string(),
            start: 0,
            end: 42,
            rest: None,
        };
        assert_eq!(region.as_string(), "scaffold_12\t0\t42");
    }

    #[rstest]
    fn test_as_string_with_rest() {
        let region = Region {
            chr: "chr2".to_string(),
            start: 5,
            end: 10,
            rest: Some("LINE/L1\t+".to_string()),
        };
        assert_eq!(region.to_string(), "chr2\t5\t10\tLINE/L1\t+");
    }
}
