use colored::*;
use safedial_core::gate::classify::{GLOBAL_UNICAST_IPV6, RESERVED_IPV4};

use crate::terminal::print;

pub fn ranges() {
    print::header("reserved ipv4 (denied)");
    for block in RESERVED_IPV4.iter() {
        print::aligned_line(&block.range.to_string(), block.purpose.bright_black());
    }

    print::header("ipv6 (only this is allowed)");
    print::aligned_line(&GLOBAL_UNICAST_IPV6.to_string(), "global unicast".bright_black());
}
