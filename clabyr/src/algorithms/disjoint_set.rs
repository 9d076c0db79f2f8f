/// Disjoint-set forest with union by rank and path compression.
///
/// Roots point to themselves.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets left.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // second pass points every visited link straight at the root
        let mut cur = i;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        root
    }

    /// Merges the sets of `i` and `j`.
    ///
    /// Returns `false` if they already were in the same set.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let i_root = self.find(i);
        let j_root = self.find(j);
        if i_root == j_root {
            return false;
        }

        if self.rank[i_root] < self.rank[j_root] {
            self.parent[i_root] = j_root;
        } else {
            self.parent[j_root] = i_root;
            if self.rank[i_root] == self.rank[j_root] {
                self.rank[i_root] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }
}
