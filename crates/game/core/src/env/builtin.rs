//! Built-in furniture types.
//!
//! Mirrors `data/furniture.ron` in furniture-content; the content crate tests
//! that both stay identical.

use crate::capability::Capability::{Close, Grab, Open, Push, RangedAttack};
use crate::env::palette::*;
use crate::env::{Color, TypeTemplate};

const PALE: Color = Color::from_hex(0xeeeeee);

pub(crate) fn templates() -> Vec<(&'static str, TypeTemplate)> {
    vec![
        (
            "chair",
            TypeTemplate::builder("Chair")
                .glyph('h')
                .color(ORANGE)
                .console_color(ORANGE_ALT)
                .hit_points(4)
                .grants([Grab, Push])
                .build(),
        ),
        (
            "trashcan",
            TypeTemplate::builder("Trashcan")
                .glyph('u')
                .color(GREEN)
                .console_color(GREEN_ALT)
                .hit_points(1)
                .grants([Grab, Push])
                .build(),
        ),
        (
            "biohazard_trash",
            TypeTemplate::builder("Biohazard Trash")
                .glyph('u')
                .color(RED)
                .console_color(RED_ALT)
                .hit_points(1)
                .grants([Grab, Push])
                .build(),
        ),
        (
            "shelves",
            TypeTemplate::builder("Shelves")
                .glyph('▤')
                .color(TAN)
                .console_color(TAN)
                .hit_points(5)
                .grants([Grab, Push, RangedAttack])
                .build(),
        ),
        (
            "refridgerator",
            TypeTemplate::builder("Refridgerator")
                .glyph('O')
                .color(TAN)
                .console_color(TAN)
                .hit_points(5)
                .grants([Grab, Push, RangedAttack])
                .build(),
        ),
        (
            "analyzer",
            TypeTemplate::builder("Analyzer")
                .glyph('A')
                .color(BLUE)
                .console_color(TAN)
                .hit_points(5)
                .grants([Grab, Push, RangedAttack])
                .build(),
        ),
        (
            "microscope",
            TypeTemplate::builder("Microscope")
                .glyph('M')
                .color(PALE)
                .console_color(PALE)
                .build(),
        ),
        (
            "table",
            TypeTemplate::builder("Table")
                .glyph('T')
                .color(PURPLE)
                .console_color(PURPLE_ALT)
                .empty_initializer()
                .build(),
        ),
        (
            "desk",
            TypeTemplate::builder("Desk")
                .glyph('T')
                .color(BROWN)
                .console_color(BROWN)
                .hit_points(4)
                .empty_initializer()
                .build(),
        ),
        (
            "computer",
            TypeTemplate::builder("Computer")
                .glyph('C')
                .color(BLUE)
                .console_color(BLUE)
                .hit_points(1)
                .passable(true)
                .empty_initializer()
                .build(),
        ),
        (
            "box",
            TypeTemplate::builder("Box")
                .glyph('☒')
                .color(YELLOW)
                .console_color(YELLOW_ALT)
                .hit_points(6)
                .grants([Grab, Push])
                .build(),
        ),
        (
            "door",
            TypeTemplate::builder("Door")
                .glyph('+')
                .color(YELLOW)
                .console_color(YELLOW)
                .hit_points(5)
                .blocks_los(true)
                .grants([Open, Close])
                .build(),
        ),
        (
            "door_glass",
            TypeTemplate::builder("Glass Door")
                .glyph('+')
                .color(TEAL)
                .console_color(TEAL)
                .hit_points(3)
                .grants([Open, Close])
                .build(),
        ),
        (
            "chest",
            TypeTemplate::builder("Chest")
                .glyph('_')
                .color(YELLOW)
                .console_color(YELLOW)
                .hit_points(5)
                .passable(true)
                .grants([Open, Close])
                .build(),
        ),
        (
            "crate",
            TypeTemplate::builder("Crate")
                .glyph('-')
                .color(YELLOW)
                .console_color(YELLOW)
                .hit_points(5)
                .passable(true)
                .grants([Open, Close])
                .build(),
        ),
        (
            "whiteboard",
            TypeTemplate::builder("Whiteboard")
                .glyph('-')
                .color(WHITE)
                .bg_color(GRAY)
                .blocks_los(true)
                .hit_points(1)
                .build(),
        ),
        (
            "cabnet",
            TypeTemplate::builder("Cabnet").glyph('[').color(TAN).build(),
        ),
        (
            "printer",
            TypeTemplate::builder("Printer").glyph('⎙').color(GRAY).build(),
        ),
        // walls
        (
            "window",
            TypeTemplate::builder("Window")
                .wall()
                .glyph('/')
                .color(TEAL)
                .bg_color(SLATE_ALT)
                .hit_points(10)
                .build(),
        ),
        (
            "cubicle_wall",
            TypeTemplate::builder("Cubicle Wall")
                .wall()
                .glyph('+')
                .color(GRAY)
                .hit_points(5)
                .blocks_los(true)
                .empty_initializer()
                .build(),
        ),
        (
            "placeholder",
            TypeTemplate::builder("Placeholder").passable(true).build(),
        ),
        (
            "work_bench",
            TypeTemplate::builder("Work Bench")
                .glyph('T')
                .color(PURPLE)
                .console_color(PURPLE_ALT)
                .build(),
        ),
    ]
}
