use clap::{arg,crate_version,Command,ArgAction};
use wordhuff::{bits,decode,freq,stats,tree,word_huff,DYNERR,STDRESULT};

const RCH: &str = "unreachable was reached";

fn read_text(path_in: &str) -> Result<String,DYNERR> {
    let text = std::fs::read_to_string(path_in)?;
    log::debug!("read {} bytes from {}",text.len(),path_in);
    Ok(text)
}

fn main() -> STDRESULT
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let long_help =
"Examples:
---------
Compress:      `wordhuff compress -i my_text.txt --codes`
Round trip:    `wordhuff roundtrip -i my_text.txt --progress`
Decode:        `wordhuff decode -i my_text.txt -b my_bits.txt`";

    let mut main_cmd = Command::new("wordhuff")
        .about("Word-granularity Huffman compression of text")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("compress")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(--codes "also print the code table").action(ArgAction::SetTrue))
        .arg(arg!(--hex "print packed bytes in hex instead of bits").action(ArgAction::SetTrue))
        .about("print the encoded bit stream of a text file"));

    main_cmd = main_cmd.subcommand(Command::new("roundtrip")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(--progress "report decompression progress on stderr").action(ArgAction::SetTrue))
        .about("compress and decompress a text file, showing sizes"));

    main_cmd = main_cmd.subcommand(Command::new("decode")
        .arg(arg!(-i --input <PATH> "text the code was built from").required(true))
        .arg(arg!(-b --bits <PATH> "file containing the bit string").required(true))
        .about("decode a bit string against the tree of a text file"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("compress") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let text = read_text(path_in)?;
        let compressed = word_huff::compress(&text,&wordhuff::STD_OPTIONS)?;
        match cmd.get_flag("hex") {
            true => println!("{}",hex::encode_upper(bits::pack(&compressed.bits))),
            false => println!("{}",bits::to_bit_string(&compressed.bits))
        }
        if cmd.get_flag("codes") {
            print!("{}",compressed.codes);
        }
        eprintln!("compressed {} words into {} bits",compressed.tree.weight(),compressed.bits.len());
    }

    if let Some(cmd) = matches.subcommand_matches("roundtrip") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let show_progress = cmd.get_flag("progress");
        let text = read_text(path_in)?;
        let mut opt = wordhuff::STD_OPTIONS.clone();
        opt.verify = true;
        let compressed = word_huff::compress(&text,&opt)?;
        let expanded = word_huff::expand_with_progress(&compressed,|p: &decode::Progress| {
            if show_progress {
                eprintln!("Decompressing... {:.2}%",p.percent());
            }
        })?;
        let sizes = stats::Stats::new(&text,&compressed.bits);
        println!("Compressed Data:\n{}\n",bits::to_bit_string(&compressed.bits));
        println!("Huffman Codes:\n{}",compressed.codes);
        println!("Original Size: {:.4} KB",sizes.original_kb());
        println!("Compressed Size: {:.4} KB",sizes.compressed_kb());
        if let Some(ratio) = sizes.ratio() {
            println!("Compression Ratio: {:.2}",ratio);
        }
        println!("\nDecompressed Text:\n{}",expanded);
    }

    if let Some(cmd) = matches.subcommand_matches("decode") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_bits = cmd.get_one::<String>("bits").expect(RCH);
        let text = read_text(path_in)?;
        let huff_tree = tree::build_tree(&freq::analyze(&text)?)?;
        let stream = bits::parse_bit_string(&read_text(path_bits)?)?;
        let words = decode::decode(&stream,&huff_tree)?;
        println!("{}",decode::join_words(&words));
    }

    Ok(())
}
