//! Probe an MSR605 on a serial port.
//!
//! Usage:
//!   cargo run -p libmsr --example msr_probe --features serial -- [-v] <port> [command]
//!
//! Commands:
//!   info (default), firmware, model
//!   test, com_test, ram_test, sensor_test
//!   coercivity, hico, lowco
//!   read [iso|raw]
//!   write [iso|raw] <t1> <t2> <t3>    (`-` leaves a track out)
//!   erase <tracks>                    (e.g. `13` for tracks 1 and 3)
//!   bpc <a> <b> <c>, bpi <track> <value>
//!   reset, green, yellow, red, leds
//!
//! `-v` logs every command and reply.

use anyhow::{Context, Result, bail};
use libmsr::device::{Device, DeviceBuilder};
use libmsr::transport::SerialConfig;
use libmsr::types::{Coercivity, DataFormat, EraseMask, Led, SelfTest, Track, TrackData};

const USAGE: &str = "usage: msr_probe [-v] <port> [info|firmware|model|test|com_test|ram_test|sensor_test|coercivity|hico|lowco|read [iso|raw]|write [iso|raw] t1 t2 t3|erase <tracks>|bpc a b c|bpi t v|reset|green|yellow|red|leds]";

#[derive(Debug, PartialEq, Eq)]
enum Request {
    Info,
    Firmware,
    Model,
    AllTests,
    Test(SelfTest),
    CoercivityStatus,
    SetCoercivity(Coercivity),
    Read(DataFormat),
    Write(DataFormat, TrackData),
    Erase(EraseMask),
    Bpc([u8; 3]),
    Bpi(u8, u16),
    Reset,
    Leds(Led),
}

#[derive(Debug)]
struct Cli {
    verbose: bool,
    port: String,
    request: Request,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_cli(&args)?;

    let mut dev = DeviceBuilder::new()
        .with_serial(&SerialConfig::new(cli.port.as_str()))
        .with_context(|| format!("opening {}", cli.port))?
        .verbose(cli.verbose || log::log_enabled!(log::Level::Debug))
        .build()?;

    run(&mut dev, cli.request)?;
    dev.close()?;
    Ok(())
}

fn parse_cli(args: &[String]) -> Result<Cli> {
    let (verbose, args) = match args.first().map(String::as_str) {
        Some("-v") => (true, &args[1..]),
        _ => (false, args),
    };
    let Some((port, rest)) = args.split_first() else {
        bail!(USAGE);
    };
    Ok(Cli {
        verbose,
        port: port.clone(),
        request: parse_request(rest)?,
    })
}

fn parse_request(args: &[String]) -> Result<Request> {
    let command = args.first().map(String::as_str).unwrap_or("info");
    let rest = args.get(1..).unwrap_or(&[]);

    let request = match command {
        "info" => Request::Info,
        "firmware" => Request::Firmware,
        "model" => Request::Model,
        "test" => Request::AllTests,
        "com_test" => Request::Test(SelfTest::Communication),
        "ram_test" => Request::Test(SelfTest::Ram),
        "sensor_test" => Request::Test(SelfTest::Sensor),
        "coercivity" => Request::CoercivityStatus,
        "hico" => Request::SetCoercivity(Coercivity::High),
        "lowco" => Request::SetCoercivity(Coercivity::Low),
        "read" => {
            let (format, _) = parse_format(rest)?;
            Request::Read(format)
        }
        "write" => {
            let (format, tracks) = parse_format(rest)?;
            Request::Write(format, parse_track_data(tracks)?)
        }
        "erase" => Request::Erase(parse_tracks(
            rest.first().map(String::as_str).unwrap_or("123"),
        )?),
        "bpc" => Request::Bpc(parse_numbers::<u8, 3>(rest)?),
        "bpi" => {
            let [track, value] = parse_numbers::<u16, 2>(rest)?;
            Request::Bpi(u8::try_from(track).context("track out of range")?, value)
        }
        "reset" => Request::Reset,
        "green" => Request::Leds(Led::Green),
        "yellow" => Request::Leds(Led::Yellow),
        "red" => Request::Leds(Led::Red),
        "leds" => Request::Leds(Led::AllOn),
        other => bail!("unknown command {:?}\n{}", other, USAGE),
    };
    Ok(request)
}

/// Optional leading `iso`/`raw`; ISO when absent.
fn parse_format(args: &[String]) -> Result<(DataFormat, &[String])> {
    match args.first().map(String::as_str) {
        Some("raw") => Ok((DataFormat::Raw, &args[1..])),
        Some("iso") => Ok((DataFormat::Iso, &args[1..])),
        _ => Ok((DataFormat::Iso, args)),
    }
}

/// Exactly three track arguments; `-` leaves that track out.
fn parse_track_data(args: &[String]) -> Result<TrackData> {
    if args.len() != 3 {
        bail!("write needs three track arguments\n{}", USAGE);
    }
    let mut tracks = TrackData::new();
    for (track, arg) in Track::ALL.into_iter().zip(args) {
        if arg != "-" {
            tracks.set(track, arg.as_bytes());
        }
    }
    if tracks.is_empty() {
        bail!("write needs at least one track");
    }
    Ok(tracks)
}

/// "13" selects tracks 1 and 3.
fn parse_tracks(selection: &str) -> Result<EraseMask> {
    let tracks = selection
        .chars()
        .map(|c| {
            let n = c.to_digit(10).context("track must be a digit")?;
            Ok(Track::try_from(n as u8)?)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(EraseMask::from_tracks(&tracks))
}

fn parse_numbers<N: std::str::FromStr, const K: usize>(args: &[String]) -> Result<[N; K]>
where
    N::Err: std::error::Error + Send + Sync + 'static,
{
    if args.len() != K {
        bail!("expected {} numbers\n{}", K, USAGE);
    }
    let values = args
        .iter()
        .map(|a| a.parse::<N>().with_context(|| format!("invalid number {:?}", a)))
        .collect::<Result<Vec<N>>>()?;
    values
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected {} numbers", K))
}

fn run(dev: &mut Device, request: Request) -> Result<()> {
    match request {
        Request::Info => {
            let info = dev.info()?;
            println!("firmware: {}", info.firmware_lossy());
            println!("model:    {}", info.model_lossy());
        }
        Request::Firmware => println!("{}", String::from_utf8_lossy(&dev.firmware_version()?)),
        Request::Model => println!("{}", String::from_utf8_lossy(&dev.device_model()?)),
        Request::AllTests => {
            for outcome in dev.run_all_self_tests()? {
                print_outcome(outcome.test, outcome.passed);
            }
        }
        Request::Test(test) => {
            if test == SelfTest::Sensor {
                println!("swipe a card...");
            }
            let outcome = dev.run_self_test(test)?;
            print_outcome(outcome.test, outcome.passed);
        }
        Request::CoercivityStatus => println!("{}", dev.coercivity_status()?),
        Request::SetCoercivity(c) => {
            dev.set_coercivity(c)?;
            println!("coercivity set to {}", c);
        }
        Request::Read(format) => {
            println!("swipe a card...");
            let read = dev.read(format)?;
            for (track, data) in read.tracks.iter() {
                match format {
                    DataFormat::Iso => println!("{}: {}", track, String::from_utf8_lossy(data)),
                    DataFormat::Raw => println!("{}: {}", track, hex::encode(data)),
                }
            }
            println!("status: {}", read.status);
        }
        Request::Write(format, tracks) => {
            println!("swipe a card to write...");
            println!("write: {}", dev.write(format, &tracks)?);
        }
        Request::Erase(mask) => {
            println!("swipe a card to erase...");
            println!("erase: {}", if dev.erase(mask)? { "ok" } else { "failed" });
        }
        Request::Bpc([a, b, c]) => {
            let echoed = dev.set_bpc(a, b, c)?;
            println!("bpc set: {}", hex::encode(echoed));
        }
        Request::Bpi(track, value) => println!("bpi set: {}", dev.set_bpi(track, value)?),
        Request::Reset => dev.reset()?,
        Request::Leds(led) => dev.set_leds(led)?,
    }
    Ok(())
}

fn print_outcome(test: SelfTest, passed: bool) {
    println!("{:<14} {}", test.to_string(), if passed { "pass" } else { "FAIL" });
}
