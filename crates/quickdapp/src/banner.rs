//! Intro banner shown before the interactive flow

use console::style;

const TITLE: &str = r#"
    ██████╗ ██╗   ██╗██╗ ██████╗██╗  ██╗██████╗  █████╗ ██████╗ ██████╗
   ██╔═══██╗██║   ██║██║██╔════╝██║ ██╔╝██╔══██╗██╔══██╗██╔══██╗██╔══██╗
   ██║   ██║██║   ██║██║██║     █████╔╝ ██║  ██║███████║██████╔╝██████╔╝
   ██║▄▄ ██║██║   ██║██║██║     ██╔═██╗ ██║  ██║██╔══██║██╔═══╝ ██╔═══╝
   ╚██████╔╝╚██████╔╝██║╚██████╗██║  ██╗██████╔╝██║  ██║██║     ██║
    ╚══▀▀═╝  ╚═════╝ ╚═╝ ╚═════╝╚═╝  ╚═╝╚═════╝ ╚═╝  ╚═╝╚═╝     ╚═╝
"#;

/// Print the title banner and tagline
pub fn show() {
    println!("{}", style(TITLE).blue().bold());
    println!(
        "{}",
        style("                    Web3 dApp starter template").cyan().bold()
    );
    println!();
}
