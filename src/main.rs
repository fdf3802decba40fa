#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use embedded_hal::digital::v2::ToggleableOutputPin;
    use max72xx_matrix::{ChainConfig, MatrixChain, OrientationMode};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::ExtU32,
        gpio::{
            bank0::{Gpio17, Gpio18, Gpio19, Gpio25},
            FunctionSio, Pin, PullDown, SioOutput,
        },
        sio::Sio,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
    };

    const MODULES: usize = 4;
    const GREETING: &str = "Hola Pico";
    const SCROLL_STEP_MS: u32 = 40;

    type OutPin<P> = Pin<P, FunctionSio<SioOutput>, PullDown>;
    type Matrix = MatrixChain<OutPin<Gpio19>, OutPin<Gpio18>, OutPin<Gpio17>>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        matrix: Matrix,
        led: OutPin<Gpio25>,
        alarm: Alarm0,
        seconds: i32,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();
        let data = pins.gpio19.into_push_pull_output();
        let clock = pins.gpio18.into_push_pull_output();
        let latch = pins.gpio17.into_push_pull_output();

        let config = ChainConfig::new()
            .with_module_count(MODULES)
            .with_orientation(OrientationMode::ClockwiseMount)
            .with_intensity(1);
        let mut matrix = MatrixChain::with_config(data, clock, latch, config);
        defmt::info!("matrix up: {}", matrix.config());

        let mut delay =
            cortex_m::delay::Delay::new(ctx.core.SYST, clocks.system_clock.freq().to_Hz());
        matrix.scroll(GREETING, SCROLL_STEP_MS, &mut delay);
        matrix.format_number(0, 0);

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        // first tick in 1 second
        alarm.schedule(1_000_000u32.micros()).unwrap();
        alarm.enable_interrupt();

        (
            Shared {},
            Local {
                matrix,
                led,
                alarm,
                seconds: 0,
            },
            init::Monotonics(),
        )
    }

    // 1 Hz: count up and redraw
    #[task(binds = TIMER_IRQ_0, priority = 1, local = [alarm, led, matrix, seconds])]
    fn timer_tick(ctx: timer_tick::Context) {
        ctx.local.alarm.clear_interrupt();
        ctx.local.alarm.schedule(1_000_000u32.micros()).ok();

        ctx.local.led.toggle().ok();

        *ctx.local.seconds = ctx.local.seconds.wrapping_add(1);
        defmt::trace!("tick {}", *ctx.local.seconds);
        ctx.local.matrix.format_number(*ctx.local.seconds, 0);
    }
}
