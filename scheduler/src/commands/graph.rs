use std::{borrow::Cow, path::PathBuf};

use anyhow::Result;
use instance_parser::parse_instance;
use log::{info, trace};

pub fn graph(instance_path: PathBuf, output_path: PathBuf) -> Result<()> {
    let contents = std::fs::read_to_string(instance_path)?;
    trace!("input file contents: {contents}");

    let instance = parse_instance(contents.as_str())?;
    trace!("parsed instance: {instance:#?}");

    let mut durations = vec![0; instance.nodes];
    for job in &instance.jobs {
        if job.index < instance.nodes {
            durations[job.index] = job.processing_time;
        }
    }

    let edges = Edges("precedence".to_string(), durations, instance.edges);

    let mut output_file = std::fs::File::create(output_path.clone())?;
    dot::render(&edges, &mut output_file)?;

    info!("Wrote graphviz dot file to: {:?}", output_path);

    Ok(())
}

type Nd = usize;
type Ed = (usize, usize);
struct Edges(String, Vec<u32>, Vec<Ed>);

impl<'a> dot::Labeller<'a, Nd, Ed> for Edges {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new(self.0.clone()).expect("Failed to get graph id")
    }

    fn node_id(&'a self, n: &Nd) -> dot::Id<'a> {
        let id = format!("N{}", *n);
        dot::Id::new(id).expect("Failed to label graph node")
    }

    fn node_label(&'a self, n: &Nd) -> dot::LabelText<'a> {
        let duration = self.1.get(*n).copied().unwrap_or_default();
        dot::LabelText::label(format!("{} ({})", *n, duration))
    }
}

impl<'a> dot::GraphWalk<'a, Nd, Ed> for Edges {
    fn nodes(&'a self) -> dot::Nodes<'a, Nd> {
        let v = &self.2;
        let mut nodes = Vec::with_capacity(v.len());
        for &(s, t) in v {
            nodes.push(s);
            nodes.push(t);
        }
        nodes.sort_unstable();
        nodes.dedup();
        Cow::Owned(nodes)
    }

    fn edges(&'a self) -> dot::Edges<'a, Ed> {
        let edges = &self.2;
        Cow::Borrowed(&edges[..])
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}
