use std::collections::HashMap;

use miette::*;

const MAX_FOLDER_SIZE: u64 = 100_000;

#[derive(Debug, Default)]
struct Folder {
    files: HashMap<String, u64>,
    folders: HashMap<String, usize>,
    parent: Option<usize>,
}

/// Folder tree replayed from the terminal session, arena-indexed with the
/// root at slot 0.
#[derive(Debug)]
struct FileTree {
    folders: Vec<Folder>,
}

impl FileTree {
    fn from_terminal_output(input: &str) -> Result<Self> {
        let mut tree = FileTree {
            folders: vec![Folder::default()],
        };
        let mut current = 0;

        for line in input.lines() {
            if line == "$ cd /" {
                current = 0;
            } else if line == "$ cd .." {
                current = tree.folders[current]
                    .parent
                    .ok_or_else(|| miette!("Cannot `cd ..` out of the root"))?;
            } else if let Some(name) = line.strip_prefix("$ cd ") {
                current = tree.child(current, name);
            } else if line == "$ ls" {
                continue;
            } else if let Some(name) = line.strip_prefix("dir ") {
                tree.child(current, name);
            } else {
                let (raw_size, name) = line
                    .split_once(' ')
                    .ok_or_else(|| miette!("Unrecognized terminal line {:?}", line))?;
                let size = raw_size
                    .parse()
                    .map_err(|e| miette!("Bad file size {:?}: {}", raw_size, e))?;
                tree.folders[current].files.insert(name.to_string(), size);
            }
        }

        Ok(tree)
    }

    fn child(&mut self, parent: usize, name: &str) -> usize {
        if let Some(&existing) = self.folders[parent].folders.get(name) {
            return existing;
        }
        let index = self.folders.len();
        self.folders.push(Folder {
            parent: Some(parent),
            ..Folder::default()
        });
        self.folders[parent].folders.insert(name.to_string(), index);
        index
    }

    fn total_size(&self, index: usize) -> u64 {
        let folder = &self.folders[index];
        folder.files.values().sum::<u64>()
            + folder
                .folders
                .values()
                .map(|&child| self.total_size(child))
                .sum::<u64>()
    }

    fn folder_sizes(&self) -> Vec<u64> {
        (0..self.folders.len())
            .map(|index| self.total_size(index))
            .collect()
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let tree = FileTree::from_terminal_output(input)?;

    let sum: u64 = tree
        .folder_sizes()
        .into_iter()
        .filter(|&size| size <= MAX_FOLDER_SIZE)
        .sum();

    Ok(sum.to_string())
}
