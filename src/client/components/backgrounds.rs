//! Decorative SVG backdrops for the splash sections. Keyframes live in `site.css`.

use dioxus::prelude::*;
use std::f64::consts::TAU;

const VIEW_BOX: &str = "0 0 1200 600";

#[derive(Debug, Clone, Copy, PartialEq)]
struct LatticeNode {
    x: u32,
    y: u32,
    right: bool,
    down: bool,
    delay: f32,
}

fn lattice(columns: u32, rows: u32) -> Vec<LatticeNode> {
    (0..columns)
        .flat_map(|i| (0..rows).map(move |j| (i, j)))
        .map(|(i, j)| LatticeNode {
            x: 100 + i * 250,
            y: 100 + j * 120,
            right: i + 1 < columns,
            down: j + 1 < rows,
            delay: (i + j) as f32 * 0.2,
        })
        .collect()
}

/// Points spaced evenly around an ellipse, starting at three o'clock.
fn ring(count: usize, cx: f64, cy: f64, rx: f64, ry: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * TAU;
            (cx + angle.cos() * rx, cy + angle.sin() * ry)
        })
        .collect()
}

#[component]
pub fn QuantumLatticeBackground() -> Element {
    rsx! {
        svg {
            class: "backdrop lattice",
            view_box: VIEW_BOX,
            preserve_aspect_ratio: "xMidYMid slice",
            for node in lattice(5, 5) {
                g {
                    key: "{node.x}-{node.y}",
                    if node.right {
                        line {
                            class: "quantum-line",
                            x1: "{node.x}",
                            y1: "{node.y}",
                            x2: "{node.x + 250}",
                            y2: "{node.y}",
                            style: "animation-delay: {node.delay}s",
                        }
                    }
                    if node.down {
                        line {
                            class: "quantum-line",
                            x1: "{node.x}",
                            y1: "{node.y}",
                            x2: "{node.x}",
                            y2: "{node.y + 120}",
                            style: "animation-delay: {node.delay}s",
                        }
                    }
                    circle { class: "quantum-node", cx: "{node.x}", cy: "{node.y}", r: "3" }
                }
            }
        }
    }
}

#[component]
pub fn StressVisualization() -> Element {
    rsx! {
        svg {
            class: "backdrop stress",
            view_box: VIEW_BOX,
            preserve_aspect_ratio: "xMidYMid slice",
            path {
                class: "stress-fill",
                d: "M 0 300 Q 150 280 300 300 T 600 300 T 900 300 T 1200 300 L 1200 600 L 0 600 Z",
            }
            for i in 1..=5u32 {
                path {
                    key: "crack-{i}",
                    class: "crack-line",
                    d: "M {i * 200} 150 L {i * 200 + 50} 300 L {i * 200 - 30} 450",
                    style: "animation-delay: {i as f32 * 0.2}s",
                }
            }
            for i in 0..7u32 {
                circle {
                    key: "heal-{i}",
                    class: "heal-node",
                    cx: "{i * 170 + 100}",
                    cy: "300",
                    r: "8",
                    style: "animation-delay: {i as f32 * 0.15}s",
                }
            }
        }
    }
}

#[component]
pub fn EthicsSafetyVisualization() -> Element {
    rsx! {
        svg {
            class: "backdrop ethics",
            view_box: VIEW_BOX,
            preserve_aspect_ratio: "xMidYMid slice",
            for layer in 1..=3u32 {
                rect {
                    key: "zone-{layer}",
                    class: "safe-zone",
                    x: "{200 + layer * 50}",
                    y: "{150 + layer * 50}",
                    width: "{800 - layer * 100}",
                    height: "{300 - layer * 100}",
                    rx: "20",
                    style: "animation-delay: {layer as f32 * 0.3}s",
                }
            }
            for (i, (x, y)) in ring(8, 600.0, 300.0, 250.0, 150.0).into_iter().enumerate() {
                g {
                    key: "checkpoint-{i}",
                    circle {
                        class: "checkpoint",
                        cx: "{x:.1}",
                        cy: "{y:.1}",
                        r: "8",
                        style: "animation-delay: {i as f32 * 0.1}s",
                    }
                    circle { class: "checkpoint-halo", cx: "{x:.1}", cy: "{y:.1}", r: "15" }
                }
            }
        }
    }
}

#[component]
pub fn ResearchVisualization() -> Element {
    rsx! {
        svg {
            class: "backdrop research",
            view_box: VIEW_BOX,
            preserve_aspect_ratio: "xMidYMid slice",
            for row in 0..10u32 {
                for col in 0..5u32 {
                    circle {
                        key: "data-{row}-{col}",
                        class: "data-point",
                        cx: "{150 + col * 200}",
                        cy: "{80 + row * 60}",
                        r: "3",
                        style: "animation-delay: {(row + col) as f32 * 0.1}s",
                    }
                }
            }
            for i in 0..4u32 {
                line {
                    key: "trace-{i}",
                    class: "research-trace",
                    x1: "{150 + i * 200}",
                    y1: "80",
                    x2: "{150 + i * 200}",
                    y2: "680",
                }
            }
        }
    }
}
