use colored::*;

// hand-drawn ASCII art, one color per row
#[rustfmt::skip]
pub fn print_banner() {
    println!("{}", r"        .__                .__  .__          __         __  .__   ".red().bold());
    println!("{}", r"______ |  | _____  ___.__.|  | |__| _______/  |_  _____/  |_|  |  ".yellow().bold());
    println!("{}", r"\____ \|  | \__  \<   |  ||  | |  |/  ___/\   __\/ ___\   __\  |  ".green().bold());
    println!("{}", r"|  |_> >  |__/ __ \\___  ||  |_|  |\___ \  |  | \  \___|  | |  |__".cyan().bold());
    println!("{}", r"|   __/|____(____  / ____||____/__/____  > |__|  \___  >__| |____/".blue().bold());
    println!("{}", r"|__|             \/\/                  \/            \/           ".magenta().bold());
}
