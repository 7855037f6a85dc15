// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label collisions.
//!
//! Pile several labels onto nearby anchors and watch them fan out around their
//! anchor points. Set `RUST_LOG=understory_label=trace` to see each fallback.
//!
//! Run:
//! - `RUST_LOG=understory_label=trace cargo run -p understory_demos --example label_collisions`

use kurbo::Point;
use peniko::Color;
use tracing_subscriber::EnvFilter;
use understory_label::{Anchor, LabelStyle, Labels, RecordingSurface};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ink = Color::from_rgba8(20, 20, 20, 255);
    let mut labels: Labels<usize> = Labels::with_style(LabelStyle {
        offset: 4.0,
        ..LabelStyle::default()
    });

    // A cluster of stations a few pixels apart.
    let stations = [
        (Point::new(100.0, 100.0), "Alexanderplatz"),
        (Point::new(106.0, 104.0), "Hackescher Markt"),
        (Point::new(98.0, 110.0), "Jannowitzbrücke"),
        (Point::new(104.0, 96.0), "Rosa-Luxemburg-Platz"),
        (Point::new(102.0, 102.0), "Spittelmarkt"),
    ];
    for (i, (pos, name)) in stations.into_iter().enumerate() {
        labels.add_with_color(i, ink, pos, Anchor::NorthEast, name);
    }

    let mut surface = RecordingSurface::default();
    let damage = labels.paint(&mut surface);
    println!(
        "fallbacks: {}, still overlapping: {}",
        damage.fallbacks, damage.overlapping
    );
    for item in labels.iter() {
        println!("{item}");
    }

    // A second pass with nothing changed places everything identically.
    let again = labels.paint(&mut surface);
    assert!(again.dirty_rects.is_empty(), "repaint should be stable");
}
