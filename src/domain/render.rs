//! Text renderings of an entry tree.

use std::io::{self, Write};

use termtree::Tree;

use crate::domain::arena::{Entry, EntryId};

impl Entry {
    /// Writes one line per node: `indent` tabs (plus depth), then the title.
    pub fn write_tree<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
        for (_, depth, node) in self.iter() {
            writeln!(out, "{}{}", "\t".repeat(indent + depth), node)?;
        }
        Ok(())
    }

    /// [`Entry::write_tree`] to stdout.
    pub fn print_tree(&self, indent: usize) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_tree(&mut lock, indent)?;
        lock.flush()
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Entry {
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(entry: &Entry, idx: EntryId) -> Tree<String> {
            let title = entry.title_of(idx).unwrap_or_default().to_string();
            let leaves: Vec<_> = entry
                .children(idx)
                .iter()
                .map(|&child| build_tree(entry, child))
                .collect();
            Tree::new(title).with_leaves(leaves)
        }

        build_tree(self, self.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entry: &Entry, indent: usize) -> String {
        let mut buf = Vec::new();
        entry.write_tree(&mut buf, indent).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn given_fruit_tree_when_written_then_tab_indented_preorder() {
        let entry = Entry::with_entries("Fruit", [Entry::new("Apple"), Entry::new("Banana")]);
        assert_eq!(render(&entry, 0), "Fruit\n\tApple\n\tBanana\n");
    }

    #[test]
    fn given_indent_when_written_then_every_line_shifted() {
        let mut entry = Entry::new("Veg");
        let root = entry.root();
        let leafy = entry.add_child(root, "Leafy").unwrap();
        entry.add_child(leafy, "Kale").unwrap();

        assert_eq!(render(&entry, 1), "\tVeg\n\t\tLeafy\n\t\t\tKale\n");
    }

    #[test]
    fn given_tree_when_converted_to_termtree_then_box_drawing_output() {
        let entry = Entry::with_entries("Fruit", [Entry::new("Apple"), Entry::new("Banana")]);
        let rendered = entry.to_tree_string().to_string();

        assert!(rendered.starts_with("Fruit\n"));
        assert!(rendered.contains("├── Apple"));
        assert!(rendered.contains("└── Banana"));
    }
}
