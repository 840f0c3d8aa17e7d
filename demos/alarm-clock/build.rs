// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint_build::CompilerConfiguration;
use std::env;

fn main() {
    // an explicit SLINT_STYLE wins over the per-platform default
    let style = env::var("SLINT_STYLE").unwrap_or_else(|_| {
        if env::var("TARGET").unwrap_or_default().contains("android") {
            "material".to_string()
        } else {
            "fluent".to_string()
        }
    });

    slint_build::compile_with_config("ui/main.slint", CompilerConfiguration::new().with_style(style))
        .unwrap();
}
