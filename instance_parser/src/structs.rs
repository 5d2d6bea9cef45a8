#[derive(Debug, PartialEq)]
pub struct Instance {
    pub nodes: usize,
    /// Directed precedence edges `(u, v)`: `u` must complete before `v`.
    pub edges: Vec<(usize, usize)>,
    pub jobs: Vec<JobRecord>,
}

#[derive(Debug, PartialEq)]
pub struct JobRecord {
    /// 0-indexed job index (the job table itself is 1-indexed).
    pub index: usize,
    pub kind: String,
    pub processing_time: u32,
    pub due_date: u32,
}
