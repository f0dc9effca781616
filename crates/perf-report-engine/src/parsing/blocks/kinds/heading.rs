/// A `#`-prefixed heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSig {
    pub level: u8,
    pub title: String,
}

pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Recognizes `# `, `## `, ... up to six markers followed by a space.
    pub fn sig(line: &str) -> Option<HeadingSig> {
        let hashes = line.chars().take_while(|c| *c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.starts_with(' ') {
            return None;
        }
        Some(HeadingSig {
            level: hashes as u8,
            title: rest.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_levels() {
        assert_eq!(
            AtxHeading::sig("## Destaques"),
            Some(HeadingSig {
                level: 2,
                title: "Destaques".into()
            })
        );
        assert_eq!(AtxHeading::sig("# Relatório").map(|h| h.level), Some(1));
        assert_eq!(AtxHeading::sig("#### Nota").map(|h| h.level), Some(4));
    }

    #[test]
    fn requires_space_after_markers() {
        assert_eq!(AtxHeading::sig("##Destaques"), None);
        assert_eq!(AtxHeading::sig("####### sete"), None);
        assert_eq!(AtxHeading::sig("texto # não"), None);
    }
}
