use anyhow::Result;

fn main() -> Result<()> {
    korean_name_cli::main_entry()
}
