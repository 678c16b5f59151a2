use super::menu::Orientation;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, Layer, LayerShell};

pub fn init_layer_shell(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Top);
    window.set_namespace(Some("demilune"));
    window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::OnDemand);
}

pub fn edge_for(orientation: Orientation) -> Edge {
    match orientation {
        Orientation::VerticalRight => Edge::Right,
        Orientation::VerticalLeft => Edge::Left,
        Orientation::HorizontalTop => Edge::Top,
        Orientation::HorizontalBottom => Edge::Bottom,
    }
}

/// Pins the window to the screen edge the half-disc grows out of, centered along it.
pub fn anchor_to_edge(
    window: &gtk::ApplicationWindow,
    orientation: Orientation,
    width: i32,
    height: i32,
) {
    let anchored = edge_for(orientation);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, edge == anchored);
    }
    window.set_default_size(width, height);
    window.set_size_request(width, height);
}
