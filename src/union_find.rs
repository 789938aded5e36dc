/// Union-Find (Disjoint Sets) keyed by node id, used for Kruskal cycle detection
use indexmap::IndexSet;

pub struct UnionFind<'a> {
    ids: IndexSet<&'a str>,
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl<'a> UnionFind<'a> {
    /// Create a new UnionFind with one singleton set per node id
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ids: IndexSet<&'a str> = nodes.into_iter().collect();
        let parent = (0..ids.len()).collect();
        let rank = vec![0; ids.len()];
        UnionFind { ids, parent, rank }
    }

    /// Find the representative of `node` with full path compression.
    /// Returns `None` for ids that were never registered.
    pub fn find(&mut self, node: &str) -> Option<&'a str> {
        let idx = self.ids.get_index_of(node)?;
        let root = self.find_root(idx);
        self.ids.get_index(root).copied()
    }

    /// Union the sets containing `a` and `b`.
    /// Returns true if a merge happened, false if they were already joined.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let (Some(ia), Some(ib)) = (self.ids.get_index_of(a), self.ids.get_index_of(b)) else {
            return false;
        };
        let root_a = self.find_root(ia);
        let root_b = self.find_root(ib);

        if root_a == root_b {
            return false;
        }

        // Union by rank; on a tie the first argument's root survives
        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
        true
    }

    /// Check if two nodes are in the same set
    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        match (self.ids.get_index_of(a), self.ids.get_index_of(b)) {
            (Some(ia), Some(ib)) => self.find_root(ia) == self.find_root(ib),
            _ => false,
        }
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        (0..self.parent.len())
            .filter(|&i| self.parent[i] == i)
            .count()
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every node on the path directly at the root
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}
