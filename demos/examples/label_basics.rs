// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label basics.
//!
//! Add a few labels, paint them onto a recording surface, and run the
//! occupancy and hit-test queries.
//!
//! Run:
//! - `cargo run -p understory_demos --example label_basics`

use kurbo::Point;
use peniko::Color;
use understory_label::{Anchor, Labels, RecordingSurface};

fn main() {
    let red = Color::from_rgba8(200, 30, 30, 255);
    let blue = Color::from_rgba8(30, 60, 200, 255);

    let mut labels: Labels<&str> = Labels::new();
    let _berlin = labels.add_with_color(
        "city",
        red,
        Point::new(10.0, 20.0),
        Anchor::SouthWest,
        "Berlin",
    );
    let potsdam = labels.add_with_tooltip(
        "city",
        blue,
        Point::new(10.0, 80.0),
        Anchor::NorthWest,
        "Potsdam",
        "Capital of Brandenburg",
    );
    // Unknown anchor codes are accepted and placed with the default rule.
    let _odd = labels.add_for("poi", Point::new(200.0, 40.0), Anchor::from_code(999), "Odd");

    println!(
        "before paint, hit at (20, 85): {:?}",
        labels.hit_test(Point::new(20.0, 85.0))
    );

    let mut surface = RecordingSurface::default();
    let damage = labels.paint(&mut surface);
    println!("damage union: {:?}", damage.union_rect());
    for item in labels.iter() {
        println!("{item}");
    }
    for cmd in surface.commands() {
        println!("draw: {cmd:?}");
    }

    println!(
        "blocked near origin: {}",
        labels.blocked(Point::new(0.0, 0.0), 10.0, 20.0)
    );
    let hit = labels.find(Point::new(20.0, 85.0)).unwrap();
    println!("hit: {hit} tooltip={:?}", hit.tooltip());
    assert_eq!(hit.id(), Some(potsdam), "hit-test should find the Potsdam label");
}
