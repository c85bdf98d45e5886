const ALPHABET_SIZE: usize = 26;

fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

#[derive(Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    word_count: usize,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: [const { None }; ALPHABET_SIZE],
            word_count: 0,
        }
    }

    #[cfg(test)]
    fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(|child| child.subtree_size())
            .sum::<usize>()
    }
}

pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Inserts `word`, creating missing nodes along the path. Characters
    /// outside `'a'..='z'` do not consume an edge, so `"a1b"` is stored
    /// as `"ab"`.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for idx in word.chars().filter_map(letter_index) {
            node = node.children[idx].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        node.word_count += 1;
    }

    /// Returns how many times `word` was inserted. The query is literal:
    /// unlike insertion, a character outside `'a'..='z'` anywhere in `word`
    /// yields 0.
    pub fn occurrences(&self, word: &str) -> usize {
        self.get_node(word).map_or(0, |node| node.word_count)
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in word.chars() {
            let idx = letter_index(c)?;
            node = node.children[idx].as_deref()?;
        }
        Some(node)
    }

    #[cfg(test)]
    fn node_count(&self) -> usize {
        self.root.subtree_size()
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        // Move subtrees onto a worklist instead of letting the derived drop
        // glue recurse one stack frame per trie level.
        let mut pending: Vec<Box<TrieNode>> = self
            .root
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}
