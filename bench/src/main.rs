use link_resilience_core::{Graph, GraphBuilder, LinkConnectivity};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200);

    if mode == "help" || mode == "--help" {
        println!("Usage: link-resilience-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  ring        Bidirectional ring lattice with K neighbors per side");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  random      Erdos-Renyi uniform random directed edges");
        println!("  barbell     Two dense clusters joined by a one-link-wide bridge");
        println!("  grid        Bidirectional 2D grid (degree <= 4)");
        println!();
        println!("Default node_count: 200 (the pair loops are quadratic in it)");
        return;
    }

    println!("link-resilience-bench");
    println!("=====================");
    println!();

    let generators: Vec<(&str, fn(u64) -> Graph)> = match mode {
        "ring" => vec![("Ring lattice", gen_ring)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "grid" => vec![("Bidirectional grid", gen_grid)],
        "all" => vec![
            ("Ring lattice", gen_ring as fn(u64) -> Graph),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
            ("Bidirectional grid", gen_grid),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Graph, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} nodes, {} edges, ~{:.1}KB",
        gen_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1024.0
    );
    if graph.node_count() < 2 {
        println!("(too small for pair queries)");
        println!();
        return;
    }

    // Single pair queries from node 0 to a spread of destinations
    println!();
    println!("{:>8} {:>8} {:>10}", "dest", "k", "time");
    println!("{:->8} {:->8} {:->10}", "", "", "");

    let ids = graph.node_ids().to_vec();
    let last = ids.len() - 1;
    for dest in [1, last / 4, last / 2, last] {
        let dest_id = ids[dest.max(1)];
        let t = Instant::now();
        let k = link_resilience_core::count_disjoint(&graph, ids[0], dest_id).unwrap_or(0);
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>8} {:>8.2}ms",
            dest_id,
            k,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    // All-pairs statistics
    println!();
    let t = Instant::now();
    let dist = link_resilience_core::statistics(&graph);
    println!(
        "Statistics over {} pairs: max k {:?}, {} unreachable in {:.1}ms",
        dist.total_pairs(),
        dist.max_k(),
        dist.unreachable(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    // Global edge-connectivity
    let t = Instant::now();
    let result = link_resilience_core::link_connectivity(&graph);
    let elapsed = t.elapsed().as_secs_f64() * 1000.0;
    match result {
        LinkConnectivity::SingleNode => println!("Link connectivity: undefined ({:.1}ms)", elapsed),
        LinkConnectivity::NotStronglyConnected { from, to } => println!(
            "Link connectivity: 0 ({} cannot reach {}) in {:.1}ms",
            from, to, elapsed
        ),
        LinkConnectivity::Connected { min_k, cut, .. } => println!(
            "Link connectivity: {} ({} cut links) in {:.1}ms",
            min_k,
            cut.len(),
            elapsed
        ),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded, directed
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

/// Ring lattice: each node linked both ways to its K nearest neighbors on
/// each side. Every pair has exactly 2K disjoint paths.
fn gen_ring(node_count: u64) -> Graph {
    let k = 3u64;
    let mut graph = GraphBuilder::with_capacity(node_count as usize, (node_count * k * 2) as usize);

    for i in 0..node_count {
        for j in 1..=k.min(node_count.saturating_sub(1)) {
            let neighbor = (i + j) % node_count;
            graph.add_edge(i, neighbor);
            graph.add_edge(neighbor, i);
        }
    }

    graph.build()
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random existing edge endpoint. New
/// nodes link out to the hubs and the hubs link back with probability 1/2,
/// leaving a mix of strongly and weakly connected regions.
fn gen_scale_free(node_count: u64) -> Graph {
    let edges_per_node = 3u64;
    let mut graph =
        GraphBuilder::with_capacity(node_count as usize, (node_count * edges_per_node * 2) as usize);
    let mut rng = FastRng::new(12345);

    let mut edge_endpoints: Vec<u64> = Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    // Seed: small bidirectional clique
    let seed = 4u64.min(node_count);
    for i in 0..seed {
        graph.add_node(i);
        for j in 0..i {
            graph.add_edge(i, j);
            graph.add_edge(j, i);
            edge_endpoints.push(i);
            edge_endpoints.push(j);
        }
    }

    for new_node in seed..node_count {
        graph.add_node(new_node);
        for _ in 0..edges_per_node.min(new_node) {
            let target = edge_endpoints[rng.next(edge_endpoints.len() as u64) as usize];
            if target == new_node {
                continue;
            }
            graph.add_edge(new_node, target);
            if rng.next(2) == 0 {
                graph.add_edge(target, new_node);
            }
            edge_endpoints.push(new_node);
            edge_endpoints.push(target);
        }
    }

    graph.build()
}

/// Erdos-Renyi: uniform random directed edges, ~4 per node.
fn gen_random(node_count: u64) -> Graph {
    let target_edges = node_count * 4;
    let mut graph = GraphBuilder::with_capacity(node_count as usize, target_edges as usize);
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        graph.add_node(i);
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count.max(1));
        let to = rng.next(node_count.max(1));
        if from != to {
            graph.add_edge(from, to);
        }
    }

    graph.build()
}

/// Barbell: two dense bidirectional clusters joined by a single bridge pair.
///
/// The bridge is the global minimum cut; every cross-cluster pair has k = 1.
fn gen_barbell(node_count: u64) -> Graph {
    let half = (node_count / 2).max(2);
    let mut graph = GraphBuilder::with_capacity((half * 2) as usize, (half * 12) as usize);
    let mut rng = FastRng::new(99999);

    for offset in [0, half] {
        for i in 0..half {
            // ring backbone keeps each cluster strongly connected
            let next = (i + 1) % half;
            graph.add_edge(offset + i, offset + next);
            graph.add_edge(offset + next, offset + i);
            for _ in 0..4 {
                let target = rng.next(half);
                if target != i {
                    graph.add_edge(offset + i, offset + target);
                }
            }
        }
    }

    graph.add_edge(half - 1, half);
    graph.add_edge(half, half - 1);

    graph.build()
}

/// Bidirectional grid, as close to square as `node_count` allows.
fn gen_grid(node_count: u64) -> Graph {
    let width = ((node_count as f64).sqrt() as u64).max(1);
    let height = node_count.div_ceil(width);
    let mut graph = GraphBuilder::with_capacity(node_count as usize, (node_count * 4) as usize);

    let id = |x: u64, y: u64| y * width + x;
    for y in 0..height {
        for x in 0..width {
            if id(x, y) >= node_count {
                continue;
            }
            graph.add_node(id(x, y));
            if x + 1 < width && id(x + 1, y) < node_count {
                graph.add_edge(id(x, y), id(x + 1, y));
                graph.add_edge(id(x + 1, y), id(x, y));
            }
            if y + 1 < height && id(x, y + 1) < node_count {
                graph.add_edge(id(x, y), id(x, y + 1));
                graph.add_edge(id(x, y + 1), id(x, y));
            }
        }
    }

    graph.build()
}
