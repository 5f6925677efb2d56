use std::fmt::Display;
use std::str::FromStr;

use clap::{App, AppSettings, Arg};

use heaplib::{config, int_heap, logging, utility, HeapError, IntHeap, MinHeap};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    logging::init();
    if let Err(e) = run_main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn parse_number<T>(name: &str, text: &str) -> Result<T, HeapError>
where
    T: FromStr,
    T::Err: Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| HeapError::InvalidArgument(format!("--{} `{}`: {}", name, text, e)))
}

fn build_app() -> App<'static, 'static> {
    // 获取命令行解析
    App::new("minheap")
        .about("Builds an integer min-heap, inserts into it and extracts from it")
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("items")
                .help("initial items, comma or space separated, e.g. \"5,3,8,1\"")
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::with_name("capacity")
                .short("c")
                .long("capacity")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::with_name("insert")
                .short("i")
                .long("insert")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .allow_hyphen_values(true),
        )
        .arg(Arg::with_name("extract").short("n").long("extract").takes_value(true))
        .arg(Arg::with_name("drain").long("drain"))
        .arg(Arg::with_name("random").long("random").takes_value(true))
        .arg(Arg::with_name("seed").long("seed").takes_value(true))
        .arg(Arg::with_name("show").short("s").long("show"))
        .arg(Arg::with_name("stats").long("stats"))
}

fn run_main() -> Result<(), HeapError> {
    let matches = build_app().get_matches();

    let mut heap: IntHeap = match matches.value_of("capacity") {
        Some(text) => MinHeap::try_new(parse_number::<i64>("capacity", text)?)?,
        None => int_heap(),
    };

    if let Some(text) = matches.value_of("items") {
        let items = utility::parse_items(text)?;
        let capacity = heap.capacity();
        heap = MinHeap::from_items(items, capacity);
    }

    if let Some(text) = matches.value_of("random") {
        let count = parse_number::<usize>("random", text)?;
        let mut rng = match matches.value_of("seed") {
            Some(seed) => StdRng::seed_from_u64(parse_number::<u64>("seed", seed)?),
            None => StdRng::from_entropy(),
        };
        for _ in 0..count {
            heap.insert(rng.gen_range(-1000..1000));
        }
        info!("inserted {} random values", count);
    }

    if let Some(values) = matches.values_of("insert") {
        for text in values {
            heap.insert(parse_number::<i32>("insert", text)?);
        }
    }

    if matches.is_present("show") {
        println!("{}", heap);
    }

    if let Some(text) = matches.value_of("extract") {
        let count = parse_number::<usize>("extract", text)?;
        for _ in 0..count {
            println!("{}", heap.delete_min()?);
        }
    }

    if matches.is_present("drain") {
        let mut drained = Vec::with_capacity(heap.len());
        while let Some(v) = heap.pop_min() {
            drained.push(v.to_string());
        }
        println!("{}", drained.join(" "));
    }

    if matches.is_present("stats") {
        let stats = config::stats();
        println!(
            "size:{} capacity:{} grow:{} sift_up:{} sift_down:{} build:{}",
            heap.size(),
            heap.capacity(),
            stats.grow,
            stats.sift_up,
            stats.sift_down,
            stats.build
        );
    }

    // 结束后打印记录的属性
    config::dump();
    Ok(())
}

#[test]
fn negative_leading_item() {
    let matches = build_app()
        .get_matches_from_safe(vec!["minheap", "-3,5,1", "-n", "1", "-i", "-7"])
        .unwrap();
    assert_eq!(matches.value_of("items"), Some("-3,5,1"));
    assert_eq!(matches.value_of("extract"), Some("1"));
    assert_eq!(matches.value_of("insert"), Some("-7"));
    let items = utility::parse_items(matches.value_of("items").unwrap()).unwrap();
    assert_eq!(MinHeap::from_items(items, 3).find_min(), Ok(&-3));
}

#[test]
fn huge_capacity_from_command_line() {
    let matches = build_app()
        .get_matches_from_safe(vec!["minheap", "-c", "9223372036854775807", "-i", "3"])
        .unwrap();
    let capacity = parse_number::<i64>("capacity", matches.value_of("capacity").unwrap()).unwrap();
    match MinHeap::<i32>::try_new(capacity) {
        Ok(mut heap) => {
            heap.insert(3);
            assert_eq!(heap.delete_min(), Ok(3));
        }
        Err(e) => assert!(matches!(e, HeapError::InvalidArgument(_))),
    }
}
