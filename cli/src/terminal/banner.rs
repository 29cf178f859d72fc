use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
          ____   ____ ___  ____   _
         / ___| / ___/ _ \|  _ \ / \
         \___ \| |  | | | | |_) / _ \
          ___) | |__| |_| |  __/ ___ \
         |____/ \____\___/|_| /_/   \_\
"#;

const TAGLINE: &str = "🧹 the network broom 🧹";

pub fn print() {
    print::print(&format!("{}", BANNER.yellow().bold()));
    print::centerln(&format!("{}", TAGLINE.green()));
}
