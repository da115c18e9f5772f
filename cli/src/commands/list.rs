use ipconv_common::config::Config;
use ipconv_core::Operation;

use crate::terminal::{format, print};

pub fn list(cfg: &Config) {
    if cfg.is_quiet() {
        for op in Operation::ALL {
            println!("{op}\t{}\t{}", op.title(), op.output_label());
        }
        return;
    }

    print::set_key_width(Operation::ALL.iter().map(|op| op.id()));
    for op in Operation::ALL {
        let (id, description) = format::operation_entry(&op);
        print::aligned_line(&id, description);
    }
}
