// src/backends/window.rs

//! Shows frames in an X11 window. The canvas is scaled by the largest integer
//! factor that fits the window and centered; set pixels are drawn as filled
//! rectangles, one per horizontal run.

use anyhow::{anyhow, bail, Result};
use libc::{c_char, c_int, c_uint, c_ulong};
use log::{debug, error, info, trace, warn};
use std::env;
use std::ffi::CString;
use std::mem;
use std::ptr;
use x11::xlib;

use crate::backends::{Driver, DriverKind};
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::config::{ColorScheme, WindowConfig};
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};

const MIN_WINDOW_SIZE: u32 = 16;

/// True if an X display is configured for this process.
pub fn display_available() -> bool {
    env::var_os("DISPLAY").is_some_and(|d| !d.is_empty())
}

pub struct WindowDriver {
    display: *mut xlib::Display,
    screen: c_int,
    window: xlib::Window,
    gc: xlib::GC,
    wm_delete_window: xlib::Atom,
    protocols_atom: xlib::Atom,
    foreground: c_ulong,
    background: c_ulong,
    width: u32,
    height: u32,
    closed: bool,
}

impl WindowDriver {
    /// Opens the display and maps a window of the configured size.
    pub fn new(config: &WindowConfig, colors: &ColorScheme) -> Result<Self> {
        info!(
            "Creating new WindowDriver ({}x{}, title {:?}).",
            config.width, config.height, config.title
        );
        let display = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display.is_null() {
            bail!("Failed to open X display. Check DISPLAY environment variable or X server status.");
        }
        let screen = unsafe { xlib::XDefaultScreen(display) };

        // From here on, Drop releases whatever has been created.
        let mut driver = WindowDriver {
            display,
            screen,
            window: 0,
            gc: ptr::null_mut(),
            wm_delete_window: 0,
            protocols_atom: 0,
            foreground: 0,
            background: 0,
            width: config.width.max(MIN_WINDOW_SIZE),
            height: config.height.max(MIN_WINDOW_SIZE),
            closed: false,
        };
        driver.foreground = driver.alloc_color(colors.foreground.to_rgb());
        driver.background = driver.alloc_color(colors.background.to_rgb());
        driver.create_window()?;
        driver.setup_wm_protocols_and_title(&config.title);
        driver.create_gc()?;
        unsafe {
            xlib::XMapWindow(driver.display, driver.window);
            xlib::XFlush(driver.display);
        }
        Ok(driver)
    }

    fn alloc_color(&self, rgb: Rgb) -> c_ulong {
        let Rgb(r, g, b) = rgb;
        let mut color: xlib::XColor = unsafe { mem::zeroed() };
        color.red = u16::from(r) * 257;
        color.green = u16::from(g) * 257;
        color.blue = u16::from(b) * 257;
        color.flags = (xlib::DoRed | xlib::DoGreen | xlib::DoBlue) as c_char;
        let status = unsafe {
            let colormap = xlib::XDefaultColormap(self.display, self.screen);
            xlib::XAllocColor(self.display, colormap, &mut color)
        };
        if status == 0 {
            // Assume a 24-bit TrueColor visual.
            warn!("WindowDriver: XAllocColor failed for {:?}, using raw pixel value", rgb);
            c_ulong::from(rgb.to_xrgb())
        } else {
            color.pixel
        }
    }

    fn create_window(&mut self) -> Result<()> {
        unsafe {
            let root_window = xlib::XRootWindow(self.display, self.screen);
            self.window = xlib::XCreateSimpleWindow(
                self.display,
                root_window,
                0,
                0,
                self.width as c_uint,
                self.height as c_uint,
                0,
                self.background,
                self.background,
            );
        }
        if self.window == 0 {
            return Err(anyhow!("XCreateSimpleWindow failed."));
        }
        unsafe {
            xlib::XSelectInput(
                self.display,
                self.window,
                xlib::ExposureMask | xlib::StructureNotifyMask,
            );
        }
        debug!(
            "X window created (ID: {}), initial size: {}x{}px",
            self.window, self.width, self.height
        );
        Ok(())
    }

    fn setup_wm_protocols_and_title(&mut self, title: &str) {
        unsafe {
            self.wm_delete_window = xlib::XInternAtom(
                self.display,
                b"WM_DELETE_WINDOW\0".as_ptr() as *const c_char,
                xlib::False,
            );
            self.protocols_atom = xlib::XInternAtom(
                self.display,
                b"WM_PROTOCOLS\0".as_ptr() as *const c_char,
                xlib::False,
            );
            if self.wm_delete_window != 0 && self.protocols_atom != 0 {
                xlib::XSetWMProtocols(
                    self.display,
                    self.window,
                    [self.wm_delete_window].as_mut_ptr(),
                    1,
                );
                debug!("WM_PROTOCOLS (WM_DELETE_WINDOW) registered.");
            } else {
                warn!("Failed to get WM_DELETE_WINDOW or WM_PROTOCOLS atom. Window close button might not work as expected.");
            }
        }

        match CString::new(title) {
            Ok(title) => unsafe {
                xlib::XStoreName(self.display, self.window, title.as_ptr() as *mut c_char);
            },
            Err(e) => warn!("WindowDriver: window title not set: {}", e),
        }
    }

    fn create_gc(&mut self) -> Result<()> {
        let mut gc_values: xlib::XGCValues = unsafe { mem::zeroed() };
        self.gc = unsafe { xlib::XCreateGC(self.display, self.window, 0, &mut gc_values) };
        if self.gc.is_null() {
            return Err(anyhow!("XCreateGC failed."));
        }
        debug!("Graphics Context (GC) created.");
        Ok(())
    }

    fn process_events(&mut self) {
        while unsafe { xlib::XPending(self.display) } > 0 {
            let mut xevent: xlib::XEvent = unsafe { mem::zeroed() };
            unsafe { xlib::XNextEvent(self.display, &mut xevent) };
            match unsafe { xevent.type_ } {
                xlib::Expose => trace!("XEvent: Expose, next frame repaints the window"),
                xlib::ConfigureNotify => {
                    let configure_event = unsafe { xevent.configure };
                    let (w, h) = (configure_event.width as u32, configure_event.height as u32);
                    if (w, h) != (self.width, self.height) {
                        debug!(
                            "XEvent: ConfigureNotify (resize from {}x{} to {}x{})",
                            self.width, self.height, w, h
                        );
                        self.width = w;
                        self.height = h;
                    }
                }
                xlib::ClientMessage => {
                    let client_message_event = unsafe { xevent.client_message };
                    if client_message_event.message_type == self.protocols_atom
                        && client_message_event.data.as_longs()[0] as xlib::Atom
                            == self.wm_delete_window
                    {
                        info!("XEvent: WM_DELETE_WINDOW received from window manager.");
                        self.closed = true;
                    }
                }
                other => trace!("XEvent: ignored event type {}", other),
            }
        }
    }

    fn fill(&self, pixel: c_ulong, x: i64, y: i64, w: u64, h: u64) {
        unsafe {
            xlib::XSetForeground(self.display, self.gc, pixel);
            xlib::XFillRectangle(
                self.display,
                self.window,
                self.gc,
                x as c_int,
                y as c_int,
                w as c_uint,
                h as c_uint,
            );
        }
    }

    fn draw(&self, canvas: &Canvas) {
        self.fill(self.background, 0, 0, u64::from(self.width), u64::from(self.height));

        let (pw, ph) = (canvas.pixel_width() as u64, canvas.pixel_height() as u64);
        if pw == 0 || ph == 0 {
            return;
        }
        let zoom = (u64::from(self.width) / pw)
            .min(u64::from(self.height) / ph)
            .max(1);
        let left = (i64::from(self.width) - (pw * zoom) as i64) / 2;
        let top = (i64::from(self.height) - (ph * zoom) as i64) / 2;

        let (gw, gh) = (GLYPH_WIDTH as usize, GLYPH_HEIGHT as usize);
        for y in 0..canvas.pixel_height() {
            let mut run_start = None;
            for x in 0..=canvas.pixel_width() {
                let lit = x < canvas.pixel_width()
                    && canvas.glyph(x / gw, y / gh).pixel_value((x % gw) as u32, (y % gh) as u32)
                        != 0;
                match (lit, run_start) {
                    (true, None) => run_start = Some(x),
                    (false, Some(start)) => {
                        self.fill(
                            self.foreground,
                            left + (start as u64 * zoom) as i64,
                            top + (y as u64 * zoom) as i64,
                            (x - start) as u64 * zoom,
                            zoom,
                        );
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }
        unsafe {
            xlib::XFlush(self.display);
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.display.is_null() {
            return Ok(());
        }
        unsafe {
            if !self.gc.is_null() {
                xlib::XFreeGC(self.display, self.gc);
                self.gc = ptr::null_mut();
            }
            if self.window != 0 {
                xlib::XDestroyWindow(self.display, self.window);
                self.window = 0;
            }
            let status = xlib::XCloseDisplay(self.display);
            self.display = ptr::null_mut();
            if status != 0 {
                bail!("XCloseDisplay returned non-zero status: {}", status);
            }
        }
        debug!("X display closed.");
        Ok(())
    }
}

impl Driver for WindowDriver {
    fn kind(&self) -> DriverKind {
        DriverKind::Window
    }

    fn render(&mut self, canvas: &Canvas) -> Result<()> {
        if self.display.is_null() {
            bail!("WindowDriver: render after shutdown");
        }
        self.process_events();
        if self.closed {
            bail!("WindowDriver: window was closed");
        }
        self.draw(canvas);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        info!("WindowDriver: shutting down.");
        self.cleanup()
    }
}

impl Drop for WindowDriver {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            error!("Error during WindowDriver cleanup in drop: {}", e);
        }
    }
}
