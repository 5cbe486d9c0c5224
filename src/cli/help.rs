use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Swisskit");
    box_line_center("CSV/JSON conversion and class-covering passwords");
    box_line("");
    box_line("USAGE:");
    box_line("  swisskit [pass] [OPTIONS]");
    box_line("  swisskit csv <to-json|from-json|rows> [OPTIONS] [FILE]");
    box_line("  swisskit strength [--] [PASSWORD]");
    box_line("");
    box_line("PASSWORD OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt(
        "  -p, --preset <NAME>",
        "strong, extra-strong, pin, memorable or website",
    );
    box_opt("      --no-lower", "Leave out lowercase letters");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-symbols", "Leave out symbols");
    box_opt("      --symbols <CHARS>", "Override the symbol set");
    box_opt("      --allow-similar", "Keep look-alikes such as l, 1, O and 0");
    box_opt("      --no-ambiguous", "Drop brackets, quotes and punctuation that break quoting");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output <FILE>", "Append passwords to FILE");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("      --stats", "Show pool size, entropy and random source");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from the saved settings file");
    box_opt("      --save", "Save the effective settings as defaults");
    box_opt("      --hw", "Use the hardware entropy mixer instead of the OS generator (not cryptographic)");
    box_line("");
    box_line("CSV OPTIONS:");
    box_opt("  -d, --delimiter <D>", "comma, semicolon, tab, pipe or one character (default: comma)");
    box_opt("      --compact", "Single-line JSON output");
    box_opt("  -o, --output <FILE>", "Write to FILE instead of stdout");
    box_line("");
    box_line("COMMON:");
    box_opt("  -q, --quiet", "Suppress everything except results and errors");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  swisskit                        One strong 16-character password");
    box_line("  swisskit -l 24 -n 5             Five 24-character passwords");
    box_line("  swisskit -p pin                 Six-digit PIN");
    box_line("  swisskit csv to-json data.csv   CSV file as a JSON array");
    box_line("  swisskit csv from-json -d tab   JSON on stdin to tab-separated");
    box_line("  swisskit strength 'hunter2'     Score a password with suggestions");
    box_line("");
    box_bottom();
    println!();
}
