#![no_std]
#![no_main]

use embedded_hal_0_2::timer::CountDown;
use fugit::{MicrosDurationU32, RateExtU32};
use panic_halt as _;

use ssd1306_rp2040::{Config, Display128x64, I2cInterface, PaintMode, Rotation, Shared};

use waveshare_rp2040_zero::{hal::{self as hal, gpio::{bank0::{Gpio14, Gpio15}, FunctionI2C, Pin, PullUp}, timer::{Alarm, Alarm0}, Timer, I2C}, XOSC_CRYSTAL_FREQ};
use hal::pac;
use pac::interrupt;

const FRAME_PERIOD: MicrosDurationU32 = MicrosDurationU32::millis(50);
const FRAMES_PER_QUARTER_TURN: u32 = 64;

type DisplayI2c = I2C<pac::I2C1, (Pin<Gpio14, FunctionI2C, PullUp>, Pin<Gpio15, FunctionI2C, PullUp>)>;
type Display = Display128x64<I2cInterface<DisplayI2c>>;

static DISPLAY: Shared<Display> = Shared::new();
static ALARM: Shared<Alarm0> = Shared::new();

#[hal::entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let sio = hal::Sio::new(pac.SIO);

    let clocks = hal::clocks::init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap();

    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let sda_pin: Pin<Gpio14, FunctionI2C, PullUp> = pins.gpio14.reconfigure();
    let scl_pin: Pin<Gpio15, FunctionI2C, PullUp> = pins.gpio15.reconfigure();
    let i2c = I2C::i2c1(
        pac.I2C1,
        sda_pin,
        scl_pin,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    let mut display = Display::new(I2cInterface::new(i2c), Config::default());
    if display.init().is_err() {
        // nothing answering on the bus
        loop {
            cortex_m::asm::wfi();
        }
    }

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut alarm = timer.alarm_0().unwrap();
    let mut countdown = timer.count_down();

    _ = alarm.schedule(FRAME_PERIOD);
    alarm.enable_interrupt();

    DISPLAY.install(display);
    ALARM.install(alarm);

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }

    let mut frame: u32 = 0;
    loop {
        DISPLAY.with(|display| draw_frame(display, frame));
        frame = frame.wrapping_add(1);

        countdown.start(FRAME_PERIOD);
        _ = nb::block!(countdown.wait());
    }
}

fn draw_frame(display: &mut Display, frame: u32) {
    if frame % FRAMES_PER_QUARTER_TURN == 0 {
        let quarter = (frame / FRAMES_PER_QUARTER_TURN) % 4;
        display.set_rotation(Rotation::try_from(quarter as u8).unwrap_or_default());
    }

    let fb = display.framebuffer_mut();
    fb.clear();
    let (width, height) = fb.logical_size();

    // border
    fb.draw_hline(0, 0, width, PaintMode::Set);
    fb.draw_hline(0, height - 1, width, PaintMode::Set);
    fb.draw_vline(0, 0, height, PaintMode::Set);
    fb.draw_vline(width - 1, 0, height, PaintMode::Set);

    // triangle pinned to the logical origin
    for y in 0..16 {
        fb.draw_hline(0, y, 16 - y, PaintMode::Set);
    }

    let offset = (frame % 32) as i32;
    fb.fill_rect(offset + 8, offset / 2 + 8, 24, 12, PaintMode::Invert);
}

#[interrupt]
fn TIMER_IRQ_0() {
    ALARM.with(|alarm| {
        alarm.clear_interrupt();
        _ = alarm.schedule(FRAME_PERIOD);
    });
    DISPLAY.with(|display| {
        _ = display.repaint();
    });
}
