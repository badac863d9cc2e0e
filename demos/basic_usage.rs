//! Basic build -> traverse -> remove flow.

use digraph_adt::*;

fn main() -> GraphResult<()> {
    // Create a new graph
    let mut builder = GraphBuilder::new();

    let home = builder.vertex("home");
    let docs = builder.vertex("docs");
    let blog = builder.vertex("blog");
    let post = builder.vertex("post");
    let about = builder.vertex("about");

    // Link them
    builder
        .link(home, docs)
        .link(home, blog)
        .link_weighted(blog, post, 3)
        .link(post, home)
        .link(docs, about);

    let mut graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    print!("Breadth-first from home:");
    graph.breadth_first_traversal(Some(home), |page| print!(" {}", page));
    println!();

    print!("Depth-first from home:  ");
    graph.depth_first_traversal(Some(home), |page| print!(" {}", page));
    println!();

    // Removing a vertex drops every edge that pointed at it
    if let Some(removed) = graph.remove(home) {
        println!("\nRemoved {} ({})", removed.data(), removed.key());
    }
    println!(
        "post now has {} outgoing edges; {} vertices remain",
        graph.edges_from(post).len(),
        graph.vertex_count()
    );

    let reachable: Vec<&str> = graph.depth_first(Some(blog)).map(|v| *v.data()).collect();
    println!("Reachable from blog: {:?}", reachable);

    Ok(())
}
