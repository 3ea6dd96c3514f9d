use super::Line;
use std::collections::HashMap;

/// ## Tokenized source
///
/// Fixed after lexing. A line's index is its program counter value.
/// There is always at least one line because empty text lexes to a
/// single skip line.

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn new(lines: Vec<Line>) -> Program {
        debug_assert!(!lines.is_empty());
        Program { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl std::ops::Index<usize> for Program {
    type Output = Line;
    fn index(&self, index: usize) -> &Line {
        &self.lines[index]
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            writeln!(f, "{:>4} {}", index, line)?;
        }
        Ok(())
    }
}

/// ## Label table
///
/// Maps upper-cased label names such as `@LOOP` to line indexes.
/// A name defined twice keeps its last definition.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels {
    map: HashMap<String, usize>,
}

impl Labels {
    pub fn define(&mut self, name: &str, line: usize) {
        if let Some(previous) = self.map.insert(name.to_string(), line) {
            log::warn!("label {} on line {} redefined on line {}", name, previous, line);
        } else {
            log::debug!("label {} on line {}", name, line);
        }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(name, line)| (name.as_str(), *line))
    }
}

#[cfg(test)]
mod tests {
    use crate::lang::lex;

    #[test]
    fn test_empty_source_is_one_skip_line() {
        let (program, labels) = lex("").unwrap();
        assert_eq!(program.len(), 1);
        assert!(program.line(0).unwrap().is_inert());
        assert!(labels.is_empty());
    }

    #[test]
    fn test_inspect_lines_and_labels() {
        let (program, labels) = lex("@top\nadd 1 2\n@end").unwrap();
        let inert: Vec<bool> = program.lines().map(|line| line.is_inert()).collect();
        assert_eq!(inert, vec![true, false, true]);
        let mut names: Vec<(&str, usize)> = labels.iter().collect();
        names.sort();
        assert_eq!(names, vec![("@END", 2), ("@TOP", 0)]);
        assert_eq!(program.to_string(), "   0 @TOP\n   1 ADD 1 2\n   2 @END\n");
    }

    #[test]
    fn test_last_label_wins() {
        let (_, labels) = lex("@a\nadd 1 2\n@A\n").unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("@A"), Some(2));
    }
}
