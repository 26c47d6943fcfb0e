// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless bottom sheet: replays a scripted drag against a `SheetController`
//! and prints the render offset for every frame.
//!
//! Run with, for example:
//!
//! ```text
//! RUST_LOG=understory_sheet=debug cargo run -p understory_demos --example headless_sheet -- \
//!     --detent medium --detent large --drag 40 --drag 120 --drag 210
//! ```

use clap::Parser;
use kurbo::{Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_sheet::{
    Detent, DragOutcome, PreferenceQueue, SheetController, SheetGeometry, SheetPreference,
    Visibility,
};

#[derive(Parser, Debug)]
#[command(about = "Replay a drag gesture against a headless bottom sheet")]
struct Args {
    /// Container height in logical pixels.
    #[arg(long, default_value_t = 844.0)]
    container_height: f64,
    /// Bottom safe-area inset.
    #[arg(long, default_value_t = 34.0)]
    bottom_inset: f64,
    /// Natural height of the sheet content.
    #[arg(long, default_value_t = 320.0)]
    content_height: f64,
    /// Available detents: natural, medium, large, fraction:<f>, height:<h>.
    #[arg(long = "detent", default_value = "natural")]
    detents: Vec<Detent>,
    /// Cumulative vertical translations of the drag, one per frame.
    #[arg(long = "drag", allow_negative_numbers = true)]
    drag: Vec<f64>,
    /// Interrupt the drag instead of releasing it.
    #[arg(long)]
    cancel: bool,
    /// Prevent dismissal by dragging.
    #[arg(long)]
    dismiss_disabled: bool,
    /// Always show the drag indicator.
    #[arg(long)]
    show_indicator: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Content publishes its preferences; the last write per key wins.
    let mut queue = PreferenceQueue::new();
    queue.publish(SheetPreference::detents(args.detents.iter().copied()));
    queue.publish(SheetPreference::InteractiveDismissDisabled(
        args.dismiss_disabled,
    ));
    if args.show_indicator {
        queue.publish(SheetPreference::DragIndicator(Visibility::Visible));
    }
    queue.publish(SheetPreference::ShadowEnabled(true));

    let mut sheet = SheetController::default();
    sheet.set_geometry(SheetGeometry::from_sizes(
        Size::new(390.0, args.container_height),
        args.bottom_inset,
        Size::new(390.0, args.content_height),
    ));
    sheet.apply_preferences(&mut queue);
    sheet.set_presented(true);

    println!(
        "presented at {:?}: indicator={} passthrough={} shadow={}",
        sheet.current_detent(),
        sheet.drag_indicator_visible(),
        sheet.passthrough_background_visible(),
        sheet.shadow_radius(),
    );
    for (detent, spacing) in sheet.spacing_table().iter() {
        println!("  {:<16} rests at {spacing:8.1}", detent.to_string());
    }

    for (frame, &y) in args.drag.iter().enumerate() {
        sheet.update_drag(Vec2::new(0.0, y));
        if let Some(offset) = sheet.render_offset() {
            println!(
                "frame {frame:3}: offset {:8.1} scroll_disabled={}",
                offset.y,
                sheet.content_scroll_disabled()
            );
        }
    }

    if args.cancel {
        sheet.cancel_drag();
        println!("cancelled, resting at {:?}", sheet.current_detent());
        return;
    }

    match sheet.release() {
        DragOutcome::Settled(detent) => println!("settled at {detent}"),
        DragOutcome::Dismissed(detent) => {
            // A host would flip its "is presented" binding here.
            println!("dismissed (resolved to {detent})");
        }
        DragOutcome::Unchanged => println!("no detent to settle at"),
    }
}
