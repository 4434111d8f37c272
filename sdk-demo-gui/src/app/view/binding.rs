use sdk_demo_ui::{component::text::*, widget::*};

use super::message::Message;

pub fn sum_label(operands: (f64, f64), result: Option<f64>) -> String {
    match result {
        Some(sum) => format!("{} + {} = {}", operands.0, operands.1, sum),
        None => format!("{} + {} = ...", operands.0, operands.1),
    }
}

pub fn binding<'a>(operands: (f64, f64), result: Option<f64>) -> Element<'a, Message> {
    Column::new()
        .spacing(10)
        .push(h4_bold("WASM Binding Example"))
        .push(p1_regular(sum_label(operands, result)))
        .into()
}
