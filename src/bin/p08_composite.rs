//! Pattern 8: Composite
//! Example: Files and directories summed and listed as one tree
//!
//! Run with: cargo run --bin p08_composite

// ============================================
// 1. Component interface
// ============================================

trait FileSystemComponent {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
    fn listing(&self) -> Vec<String>;
}

// ============================================
// 2. Leaf
// ============================================

struct File {
    name: String,
    size: u64,
}

impl File {
    fn new(name: &str, size: u64) -> Self {
        File {
            name: name.to_string(),
            size,
        }
    }
}

impl FileSystemComponent for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn listing(&self) -> Vec<String> {
        vec![format!("{} ({} bytes)", self.name, self.size)]
    }
}

// ============================================
// 3. Composite
// ============================================

struct Directory {
    name: String,
    // Children keep insertion order
    children: Vec<Box<dyn FileSystemComponent>>,
}

impl Directory {
    fn new(name: &str) -> Self {
        Directory {
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    fn add(&mut self, component: Box<dyn FileSystemComponent>) {
        self.children.push(component);
    }
}

impl FileSystemComponent for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(|child| child.size()).sum()
    }

    fn listing(&self) -> Vec<String> {
        let mut lines = vec![format!("Directory: {}", self.name)];
        for child in &self.children {
            lines.extend(child.listing());
        }
        lines
    }
}

fn main() {
    println!("=== Composite Demo ===\n");

    let mut dir1 = Directory::new("Folder 1");
    dir1.add(Box::new(File::new("file1.txt", 1024)));

    let mut dir2 = Directory::new("Folder 2");
    dir2.add(Box::new(File::new("file2.jpg", 2048)));

    let mut root = Directory::new("Root");
    root.add(Box::new(dir1));
    root.add(Box::new(dir2));

    for line in root.listing() {
        println!("{line}");
    }

    println!("Total Size: {} bytes", root.size());
    assert_eq!(root.size(), 3072);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Directory {
        let mut dir1 = Directory::new("Folder 1");
        dir1.add(Box::new(File::new("file1.txt", 1024)));

        let mut dir2 = Directory::new("Folder 2");
        dir2.add(Box::new(File::new("file2.jpg", 2048)));

        let mut root = Directory::new("Root");
        root.add(Box::new(dir1));
        root.add(Box::new(dir2));
        root
    }

    #[test]
    fn test_size_sums_all_leaves_recursively() {
        assert_eq!(sample_tree().size(), 3072);
    }

    #[test]
    fn test_listing_is_depth_first_in_insertion_order() {
        assert_eq!(
            sample_tree().listing(),
            vec![
                "Directory: Root",
                "Directory: Folder 1",
                "file1.txt (1024 bytes)",
                "Directory: Folder 2",
                "file2.jpg (2048 bytes)",
            ]
        );
    }

    #[test]
    fn test_empty_directory_has_zero_size() {
        let dir = Directory::new("empty");
        assert_eq!(dir.size(), 0);
        assert_eq!(dir.listing(), vec!["Directory: empty"]);
    }

    #[test]
    fn test_deep_nesting_still_sums_leaves() {
        let mut node = Directory::new("level 0");
        node.add(Box::new(File::new("seed", 1)));

        for depth in 1..=100 {
            let mut parent = Directory::new(&format!("level {depth}"));
            parent.add(Box::new(node));
            parent.add(Box::new(File::new(&format!("extra {depth}"), 2)));
            node = parent;
        }

        assert_eq!(node.size(), 1 + 2 * 100);
        assert_eq!(node.name(), "level 100");
    }
}
