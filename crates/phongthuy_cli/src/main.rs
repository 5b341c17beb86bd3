use clap::{Parser, Subcommand};
use phongthuy_advisor::{EvaluationConfig, EvaluationReport, evaluate_all_with};
use phongthuy_base::{
    ALL_HAZARD_TAGS, Direction, DirectionKind, Profile, check_hoang_oc, check_kim_lau,
    check_tam_tai, check_xung_tuoi, direction_table, element_of_month, element_of_year,
    evaluate_direction, evaluate_hazards, resolve_profile_with, ritual_age, zodiac_index,
    zodiac_name_from_year,
};
use phongthuy_time::NewYearCutoff;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phongthuy", about = "Phong thủy advisory CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cung mệnh from birth date and gender
    Profile {
        /// Birth date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        birth: String,
        /// Gender: nam or nữ
        #[arg(long)]
        gender: String,
        /// Last day counted toward the previous year (MM-DD, default 03-13)
        #[arg(long, value_parser = parse_cutoff)]
        cutoff: Option<NewYearCutoff>,
    },
    /// Con giáp and element of a year
    Zodiac {
        /// CE year
        year: i32,
    },
    /// Element of a year, and optionally of a month
    Element {
        /// CE year
        year: i32,
        /// Month (1-12)
        #[arg(long)]
        month: Option<i32>,
    },
    /// Kim Lâu, Hoang Ốc, Tam Tai and Xung Tuổi for a construction year
    Taboo {
        /// Birth date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        birth: String,
        /// Gender: nam or nữ
        #[arg(long)]
        gender: String,
        /// Construction year
        #[arg(long)]
        year: i32,
        /// Last day counted toward the previous year (MM-DD, default 03-13)
        #[arg(long, value_parser = parse_cutoff)]
        cutoff: Option<NewYearCutoff>,
    },
    /// Classify a house-facing direction for a person
    Direction {
        /// Birth date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        birth: String,
        /// Gender: nam or nữ
        #[arg(long)]
        gender: String,
        /// Facing (Bắc, Đông Nam, ... or North, SE, ...)
        #[arg(long, value_parser = parse_direction)]
        facing: Direction,
        /// Last day counted toward the previous year (MM-DD, default 03-13)
        #[arg(long, value_parser = parse_cutoff)]
        cutoff: Option<NewYearCutoff>,
    },
    /// Problems and remedies for location-feature tags
    Hazards {
        /// Tags (benh-vien, chua-nha-tho, truong-hoc, duong-dam, nga-ba, nga-tu, duong-doc, cot-dien)
        tags: Vec<String>,
    },
    /// Full advisory: personal, house facing and site
    Evaluate {
        /// Birth date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        birth: String,
        /// Gender: nam or nữ
        #[arg(long)]
        gender: String,
        /// Construction year
        #[arg(long)]
        year: i32,
        /// Construction month (1-12)
        #[arg(long)]
        month: i32,
        /// House facing (Bắc, Đông Nam, ... or North, SE, ...)
        #[arg(long, value_parser = parse_direction)]
        facing: Direction,
        /// Location-feature tag (repeatable)
        #[arg(long = "feature")]
        features: Vec<String>,
        /// Last day counted toward the previous year (MM-DD, default 03-13)
        #[arg(long, value_parser = parse_cutoff)]
        cutoff: Option<NewYearCutoff>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Profile {
            birth,
            gender,
            cutoff,
        } => {
            let p = require_profile(&birth, &gender, cutoff.unwrap_or_default());
            print_profile(&p);
        }

        Commands::Zodiac { year } => {
            println!(
                "{year}: {} (index {}) - {}",
                zodiac_name_from_year(year),
                zodiac_index(year),
                element_of_year(year).name()
            );
        }

        Commands::Element { year, month } => {
            println!("Năm {year}: {}", element_of_year(year).name());
            if let Some(m) = month {
                match element_of_month(m) {
                    Some(e) => println!("Tháng {m}: {}", e.name()),
                    None => println!("Tháng {m}: không xác định"),
                }
            }
        }

        Commands::Taboo {
            birth,
            gender,
            year,
            cutoff,
        } => {
            let p = require_profile(&birth, &gender, cutoff.unwrap_or_default());
            let age = ritual_age(year, p.effective_year);
            let owner = zodiac_index(p.effective_year);
            debug!(age, owner, "taboo inputs");

            let kl = check_kim_lau(age);
            let ho = check_hoang_oc(age);
            let tt = check_tam_tai(owner, year);
            let xt = check_xung_tuoi(owner, year);

            println!("Tuổi mụ: {age}");
            match kl.kind {
                Some(kind) => println!("Kim Lâu: PHẠM {} (dư {})", kind.name(), kl.remainder),
                None => println!("Kim Lâu: không phạm (dư {})", kl.remainder),
            }
            println!(
                "Hoang Ốc: {}{}",
                ho.phase.name(),
                if ho.is_bad { " (xấu)" } else { "" }
            );
            println!(
                "Tam Tai: {} - năm {} là năm {}; tam tai: {}",
                yes_no(tt.is_tam_tai),
                year,
                tt.construction_chi.name(),
                tt.tam_tai.map(|g| g.name()).join(", ")
            );
            println!(
                "Xung Tuổi: {} - năm {} đối xung với {}",
                yes_no(xt.is_xung),
                xt.construction_chi.name(),
                xt.opposite_chi.name()
            );
        }

        Commands::Direction {
            birth,
            gender,
            facing,
            cutoff,
        } => {
            let p = require_profile(&birth, &gender, cutoff.unwrap_or_default());
            let v = evaluate_direction(&p, facing);
            let sets = direction_table(p.cung);
            println!("{}", direction_sentence(facing, v.kind, &p));
            println!("Tốt: {}", sets.good.map(Direction::name).join(", "));
            println!("Xấu: {}", sets.bad.map(Direction::name).join(", "));
        }

        Commands::Hazards { tags } => {
            let refs: Vec<&str> = tags.iter().map(String::as_str).collect();
            let report = evaluate_hazards(&refs);
            if report.is_empty() {
                println!("KHÔNG PHÁT HIỆN YẾU TỐ XẤU CỦA BẤT ĐỘNG SẢN.");
                println!("Tags: {}", ALL_HAZARD_TAGS.map(|t| t.tag()).join(", "));
            }
            for (p, s) in report.problems.iter().zip(&report.solutions) {
                println!("- {p}");
                println!("  {s}");
            }
        }

        Commands::Evaluate {
            birth,
            gender,
            year,
            month,
            facing,
            features,
            cutoff,
            json,
        } => {
            let config = EvaluationConfig {
                new_year_cutoff: cutoff.unwrap_or_default(),
            };
            let refs: Vec<&str> = features.iter().map(String::as_str).collect();
            let report = evaluate_all_with(&config, &birth, &gender, year, month, &refs, facing)
                .unwrap_or_else(|e| fail(&e));
            info!(
                cung = report.profile.cung.name(),
                year_is_favorable = report.year_is_favorable,
                month_is_favorable = report.month_is_favorable,
                "evaluated"
            );

            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(s) => println!("{s}"),
                    Err(e) => fail(&e),
                }
            } else {
                print_report(&report);
            }
        }
    }
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    eprintln!("Lỗi: {e}");
    std::process::exit(1);
}

fn require_profile(birth: &str, gender: &str, cutoff: NewYearCutoff) -> Profile {
    resolve_profile_with(birth, gender, &cutoff).unwrap_or_else(|e| fail(&e))
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    s.parse::<Direction>().map_err(|e| e.to_string())
}

fn parse_cutoff(s: &str) -> Result<NewYearCutoff, String> {
    let (m, d) = s
        .split_once('-')
        .ok_or_else(|| format!("expected MM-DD, got {s}"))?;
    let month: i32 = m.trim().parse().map_err(|e| format!("{e}"))?;
    let day: i32 = d.trim().parse().map_err(|e| format!("{e}"))?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(format!("cutoff out of range: {s}"));
    }
    Ok(NewYearCutoff::new(month, day))
}

fn yes_no(b: bool) -> &'static str {
    if b { "PHẠM" } else { "không phạm" }
}

fn print_profile(p: &Profile) {
    println!(
        "Cung mệnh: {} - Nguyên tố: {} - Hướng: {}",
        p.cung.name(),
        p.element.name(),
        p.huong
    );
    println!(
        "Năm hiệu dụng: {} ({}) - số địa chi {} - số cung {}",
        p.effective_year,
        zodiac_name_from_year(p.effective_year),
        p.so_dia_chi,
        p.so_cung
    );
}

fn direction_sentence(facing: Direction, kind: DirectionKind, p: &Profile) -> String {
    let label = match kind {
        DirectionKind::Good => "TỐT",
        DirectionKind::Bad => "XẤU",
        DirectionKind::Neutral => "TRUNG BÌNH",
    };
    format!(
        "Hướng {} là hướng {label} cho cung mệnh {}.",
        facing.name(),
        p.cung.name()
    )
}

fn print_report(r: &EvaluationReport) {
    println!("1. Phong Thủy Cá Nhân");
    print_profile(&r.profile);
    println!("Tuổi mụ: {}", r.ritual_age);

    println!();
    println!("Kết luận về Năm {}:", r.construction_year);
    if r.year_is_favorable {
        println!("  Năm {} KHÔNG CÓ CẢNH BÁO LỚN.", r.construction_year);
    }
    for w in &r.year_warnings {
        println!("  - {w}");
    }

    println!("Kết luận về Tháng {}:", r.construction_month);
    if r.month_is_favorable {
        println!("  Tháng {} KHÔNG CÓ CẢNH BÁO LỚN.", r.construction_month);
    }
    for w in &r.month_warnings {
        println!("  - {w}");
    }

    println!();
    println!("2. Phong Thủy Hướng Nhà");
    println!(
        "{}",
        direction_sentence(r.direction.direction, r.direction.kind, &r.profile)
    );

    println!();
    println!("3. Phong Thủy Bất Động Sản");
    if r.hazards.is_empty() {
        println!("KHÔNG PHÁT HIỆN YẾU TỐ XẤU CỦA BẤT ĐỘNG SẢN.");
        return;
    }
    println!("Các vấn đề:");
    for p in &r.hazards.problems {
        println!("  - {p}");
    }
    println!("Cách hóa giải:");
    for s in &r.hazards.solutions {
        println!("  - {s}");
    }
}
